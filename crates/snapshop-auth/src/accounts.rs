//! The persisted account list.

use crate::{Account, AuthError};
use snapshop_store::{keys, JsonExt, KeyValueStore};

/// All registered accounts, in registration order.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct AccountStore {
    accounts: Vec<Account>,
}

impl AccountStore {
    /// Load the account list. A missing or corrupt list loads as empty.
    pub fn load<S>(store: &S) -> Result<Self, AuthError>
    where
        S: KeyValueStore + ?Sized,
    {
        let accounts: Vec<Account> = store.load_or_default(keys::USERS)?;
        Ok(Self { accounts })
    }

    /// Overwrite the stored list.
    pub fn save<S>(&self, store: &mut S) -> Result<(), AuthError>
    where
        S: KeyValueStore + ?Sized,
    {
        store.set_json(keys::USERS, &self.accounts)?;
        Ok(())
    }

    /// Find an account by exact email.
    pub fn find_by_email(&self, email: &str) -> Option<&Account> {
        self.accounts.iter().find(|account| account.email == email)
    }

    pub fn contains_email(&self, email: &str) -> bool {
        self.find_by_email(email).is_some()
    }

    /// Append an account, rejecting a duplicate email.
    pub fn insert(&mut self, account: Account) -> Result<&Account, AuthError> {
        if self.contains_email(&account.email) {
            return Err(AuthError::EmailTaken(account.email));
        }
        self.accounts.push(account);
        Ok(&self.accounts[self.accounts.len() - 1])
    }

    pub fn accounts(&self) -> &[Account] {
        &self.accounts
    }

    pub fn len(&self) -> usize {
        self.accounts.len()
    }

    pub fn is_empty(&self) -> bool {
        self.accounts.is_empty()
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use snapshop_store::MemoryStore;

    #[test]
    fn test_insert_rejects_duplicate_email() {
        let mut accounts = AccountStore::default();
        accounts
            .insert(Account::new("Asha", "a@b.com", "9876543210", "secret1"))
            .unwrap();

        let err = accounts
            .insert(Account::new("Other", "a@b.com", "9876543211", "secret2"))
            .unwrap_err();
        assert!(matches!(err, AuthError::EmailTaken(email) if email == "a@b.com"));
        assert_eq!(accounts.len(), 1);
    }

    #[test]
    fn test_email_lookup_is_case_sensitive() {
        let mut accounts = AccountStore::default();
        accounts
            .insert(Account::new("Asha", "a@b.com", "9876543210", "secret1"))
            .unwrap();

        assert!(accounts.find_by_email("a@b.com").is_some());
        assert!(accounts.find_by_email("A@b.com").is_none());
    }

    #[test]
    fn test_save_and_load() {
        let mut store = MemoryStore::new();
        let mut accounts = AccountStore::default();
        accounts
            .insert(Account::new("Asha", "a@b.com", "9876543210", "secret1"))
            .unwrap();
        accounts.save(&mut store).unwrap();

        let loaded = AccountStore::load(&store).unwrap();
        assert_eq!(loaded, accounts);
    }

    #[test]
    fn test_corrupt_list_loads_empty() {
        let mut store = MemoryStore::new();
        store.set(keys::USERS, "[{\"broken\":").unwrap();
        assert!(AccountStore::load(&store).unwrap().is_empty());
    }
}
