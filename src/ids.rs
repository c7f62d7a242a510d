use uuid::Uuid;

pub const ID_LEN: usize = 24;

/// Source of object identifiers for new manifest entries.
pub trait IdGenerator {
    fn next_id(&mut self) -> String;
}

/// Random identifiers in Xcode's format (24 uppercase hex chars).
/// Nothing checks them against ids already in the manifest.
#[derive(Clone, Copy, Debug, Default)]
pub struct RandomIds;

impl IdGenerator for RandomIds {
    fn next_id(&mut self) -> String {
        generate_id()
    }
}

pub fn generate_id() -> String {
    let mut id = Uuid::new_v4().simple().to_string();
    id.truncate(ID_LEN);
    id.to_uppercase()
}
