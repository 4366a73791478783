use shared::domain::Address;
use tracing::debug;

/// Ordered, in-memory list of submitted addresses.
///
/// Rows have no identity of their own: a row is addressed by its current
/// position, and removing a row shifts every later row down by one.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct AddressStore {
    addresses: Vec<Address>,
}

impl AddressStore {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn append(&mut self, address: Address) {
        self.addresses.push(address);
        debug!(len = self.addresses.len(), "address appended");
    }

    /// Removes the row currently at `index`. Out-of-range indices leave the
    /// store untouched.
    pub fn remove_at(&mut self, index: usize) -> Option<Address> {
        if index >= self.addresses.len() {
            debug!(index, len = self.addresses.len(), "remove ignored: index out of range");
            return None;
        }
        let removed = self.addresses.remove(index);
        debug!(index, len = self.addresses.len(), "address removed");
        Some(removed)
    }

    pub fn list(&self) -> &[Address] {
        &self.addresses
    }

    pub fn len(&self) -> usize {
        self.addresses.len()
    }

    pub fn is_empty(&self) -> bool {
        self.addresses.is_empty()
    }

    pub fn clear(&mut self) {
        self.addresses.clear();
    }
}

impl FromIterator<Address> for AddressStore {
    fn from_iter<I: IntoIterator<Item = Address>>(iter: I) -> Self {
        Self {
            addresses: iter.into_iter().collect(),
        }
    }
}
