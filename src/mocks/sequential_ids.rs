use crate::ids::IdGenerator;

/// Predictable ids for tests: `FEED` followed by a 20 digit hex counter.
#[derive(Clone, Debug, Default)]
pub struct SequentialIds {
    next: u64,
    issued: Vec<String>,
}

impl SequentialIds {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn issued(&self) -> &[String] {
        &self.issued
    }
}

impl IdGenerator for SequentialIds {
    fn next_id(&mut self) -> String {
        self.next += 1;
        let id = format!("FEED{:020X}", self.next);
        self.issued.push(id.clone());
        id
    }
}
