//! Customer contact record.

use serde::{Deserialize, Serialize};

/// Customer details collected at checkout.
///
/// Every field is independently optional: an abandoned prompt leaves the
/// field absent, it is not an error.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct CustomerInfo {
    /// Full name.
    pub name: Option<String>,
    /// Phone number.
    pub phone: Option<String>,
    /// Delivery address.
    pub address: Option<String>,
}

impl CustomerInfo {
    /// Create an empty record.
    pub fn new() -> Self {
        Self::default()
    }

    /// Set the customer name.
    pub fn with_name(mut self, name: impl Into<String>) -> Self {
        self.name = Some(name.into());
        self
    }

    /// Set the phone number.
    pub fn with_phone(mut self, phone: impl Into<String>) -> Self {
        self.phone = Some(phone.into());
        self
    }

    /// Set the delivery address.
    pub fn with_address(mut self, address: impl Into<String>) -> Self {
        self.address = Some(address.into());
        self
    }

    /// Check if no field was supplied.
    pub fn is_empty(&self) -> bool {
        self.name.is_none() && self.phone.is_none() && self.address.is_none()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_empty_record() {
        let customer = CustomerInfo::new();
        assert!(customer.is_empty());
    }

    #[test]
    fn test_builder() {
        let customer = CustomerInfo::new()
            .with_name("Juan")
            .with_phone("04247511271");
        assert_eq!(customer.name.as_deref(), Some("Juan"));
        assert_eq!(customer.phone.as_deref(), Some("04247511271"));
        assert!(customer.address.is_none());
        assert!(!customer.is_empty());
    }
}
