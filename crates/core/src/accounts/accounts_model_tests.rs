//! Tests for account domain models.

#[cfg(test)]
mod tests {
    use crate::accounts::{Account, AccountInput, AccountType};
    use crate::errors::{Error, ValidationError};
    use crate::stores::{Entity, EntityInput};
    use rust_decimal_macros::dec;

    fn input(name: &str) -> AccountInput {
        AccountInput {
            name: name.to_string(),
            account_type: AccountType::Checking,
            balance: dec!(1000),
            institution: Some("  ".to_string()),
        }
    }

    // ==================== AccountType ====================

    #[test]
    fn test_account_type_serialization() {
        assert_eq!(
            serde_json::to_string(&AccountType::CreditCard).unwrap(),
            "\"Credit Card\""
        );
        assert_eq!(
            serde_json::from_str::<AccountType>("\"Investment\"").unwrap(),
            AccountType::Investment
        );
        assert!(serde_json::from_str::<AccountType>("\"Crypto\"").is_err());
    }

    #[test]
    fn test_account_type_from_str() {
        assert_eq!("Credit Card".parse::<AccountType>().unwrap(), AccountType::CreditCard);
        assert_eq!(" Loan ".parse::<AccountType>().unwrap(), AccountType::Loan);
        let err = "Brokerage".parse::<AccountType>().unwrap_err();
        assert_eq!(err.field(), Some("type"));
    }

    #[test]
    fn test_liability_types() {
        let liabilities: Vec<_> = AccountType::ALL
            .into_iter()
            .filter(AccountType::is_liability)
            .collect();
        assert_eq!(liabilities, vec![AccountType::CreditCard, AccountType::Loan]);
    }

    // ==================== Validation ====================

    #[test]
    fn test_blank_name_is_rejected() {
        let err = input("   ").validate().unwrap_err();
        assert!(matches!(
            err,
            Error::Validation(ValidationError::InvalidField { field: "name", .. })
        ));
    }

    #[test]
    fn test_negative_balance_is_allowed() {
        let mut overdrawn = input("Main Checking");
        overdrawn.balance = dec!(-42.10);
        assert!(overdrawn.validate().is_ok());
    }

    // ==================== Entity ====================

    #[test]
    fn test_from_input_normalizes_text() {
        let account = Account::from_input("1".to_string(), input("  Main Checking "));
        assert_eq!(account.name, "Main Checking");
        assert_eq!(account.institution, None);
    }

    #[test]
    fn test_apply_input_keeps_id() {
        let mut account = Account::from_input("1722470400000".to_string(), input("Main"));
        account.apply_input(AccountInput {
            name: "Joint".to_string(),
            account_type: AccountType::Savings,
            balance: dec!(12750),
            institution: Some("First Bank".to_string()),
        });
        assert_eq!(account.id, "1722470400000");
        assert_eq!(account.account_type, AccountType::Savings);
        assert_eq!(account.institution.as_deref(), Some("First Bank"));
    }

    #[test]
    fn test_legacy_document_decodes() {
        let json = r#"{"id":"1","name":"Main","type":"Checking","balance":5230.5,"institution":""}"#;
        let account: Account = serde_json::from_str(json).unwrap();
        assert_eq!(account.balance, dec!(5230.5));
        assert_eq!(account.institution, None);

        let json = r#"{"id":"2","name":"Card","type":"Credit Card"}"#;
        let account: Account = serde_json::from_str(json).unwrap();
        assert_eq!(account.balance, dec!(0));
    }

    #[test]
    fn test_serialized_shape() {
        let account = Account {
            id: "1".to_string(),
            name: "Main".to_string(),
            account_type: AccountType::CreditCard,
            balance: dec!(-250.75),
            institution: Some("First Bank".to_string()),
        };
        let value = serde_json::to_value(&account).unwrap();
        assert_eq!(value["type"], "Credit Card");
        assert_eq!(value["balance"], serde_json::json!(-250.75));
        assert_eq!(value["institution"], "First Bank");
    }
}
