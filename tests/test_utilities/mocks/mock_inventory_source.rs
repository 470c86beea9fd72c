use brewls::prelude::*;

/// Mock InventorySource serving a fixed `brew info --json=v2` document
pub struct MockInventorySource {
    pub content: String,
    pub should_fail: bool,
}

impl MockInventorySource {
    pub fn new(content: impl Into<String>) -> Self {
        Self {
            content: content.into(),
            should_fail: false,
        }
    }

    pub fn with_failure() -> Self {
        Self {
            content: String::new(),
            should_fail: true,
        }
    }
}

impl InventorySource for MockInventorySource {
    fn fetch_snapshot(&self) -> Result<String> {
        if self.should_fail {
            anyhow::bail!("Mock brew invocation failure");
        }
        Ok(self.content.clone())
    }

    fn fetch_inventory(&self) -> Result<Inventory> {
        let snapshot = self.fetch_snapshot()?;
        SnapshotDecoder::decode(&snapshot)
    }
}
