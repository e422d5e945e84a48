//! Transaction types for AUMChain

/// Sender identifier stamped on engine-minted reward transactions.
pub const NETWORK_SENDER: &str = "Network";

/// A transaction that can occur in a block or in the pending pool.
///
/// The `kind` tag is serialized alongside the variant's fields so that the
/// canonical digest input distinguishes variants with overlapping field
/// names. Once a transaction is placed in a mined block it is immutable;
/// it is appendable/removable only while resident in the pending pool.
#[derive(Debug, Clone, PartialEq, serde::Serialize, serde::Deserialize)]
#[serde(tag = "kind")]
pub enum Transaction {
    Transfer {
        sender: String,
        recipient: String,
        amount: f64,
    },
    /// Minted by the engine during a mining pass; network-originated.
    Reward { recipient: String, amount: f64 },
    Genesis { note: String },
    /// Free-form asset registration, carried opaquely by the engine.
    AssetRegistration {
        owner: String,
        name: String,
        metadata: String,
    },
}

impl Transaction {
    pub fn transfer(sender: impl Into<String>, recipient: impl Into<String>, amount: f64) -> Self {
        Transaction::Transfer {
            sender: sender.into(),
            recipient: recipient.into(),
            amount,
        }
    }

    pub fn reward(recipient: impl Into<String>, amount: f64) -> Self {
        Transaction::Reward {
            recipient: recipient.into(),
            amount,
        }
    }

    /// The monetary amount carried by this transaction, if any.
    pub fn amount(&self) -> Option<f64> {
        match self {
            Transaction::Transfer { amount, .. } | Transaction::Reward { amount, .. } => {
                Some(*amount)
            }
            Transaction::Genesis { .. } | Transaction::AssetRegistration { .. } => None,
        }
    }

    pub fn is_reward(&self) -> bool {
        matches!(self, Transaction::Reward { .. })
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn transfer_carries_amount() {
        let tx = Transaction::transfer("Investor", "Akshay", 100.0);
        assert_eq!(tx.amount(), Some(100.0));
        assert!(!tx.is_reward());
    }

    #[test]
    fn reward_is_tagged() {
        let tx = Transaction::reward("Miner", 50.0);
        assert!(tx.is_reward());
        assert_eq!(tx.amount(), Some(50.0));
    }

    #[test]
    fn canonical_value_sorts_keys() {
        // serde_json's default map is BTreeMap-backed, so converting to a
        // Value yields lexicographically sorted keys in the output.
        let tx = Transaction::transfer("a", "b", 1.5);
        let value = serde_json::to_value(&tx).unwrap();
        let keys: Vec<&str> = value.as_object().unwrap().keys().map(|k| k.as_str()).collect();
        assert_eq!(keys, vec!["amount", "kind", "recipient", "sender"]);
        assert_eq!(value["kind"], "Transfer");
    }

    #[test]
    fn genesis_and_registration_have_no_amount() {
        let genesis = Transaction::Genesis {
            note: "launch".to_string(),
        };
        let reg = Transaction::AssetRegistration {
            owner: "alice".to_string(),
            name: "deed-17".to_string(),
            metadata: "plot of land".to_string(),
        };
        assert_eq!(genesis.amount(), None);
        assert_eq!(reg.amount(), None);
    }
}
