use serde::{Deserialize, Serialize};
use std::fmt::{self, Display};

/// Addresses one table: optional catalog (database) and schema qualifiers
/// plus the table name.
#[derive(Deserialize, Serialize, Debug, Clone, PartialEq, Eq, Hash, PartialOrd, Ord)]
pub struct TableId {
    pub catalog: Option<String>,
    pub schema: Option<String>,
    pub table: String,
}

impl TableId {
    pub fn new(catalog: Option<&str>, schema: Option<&str>, table: &str) -> Self {
        TableId {
            catalog: catalog.map(str::to_string),
            schema: schema.map(str::to_string),
            table: table.to_string(),
        }
    }

    /// Backtick-quoted form, e.g. `` `inventory`.`products` ``.
    pub fn quoted(&self) -> String {
        self.parts()
            .map(|part| format!("`{}`", part.replace('`', "``")))
            .collect::<Vec<_>>()
            .join(".")
    }

    fn parts(&self) -> impl Iterator<Item = &str> {
        self.catalog
            .as_deref()
            .into_iter()
            .chain(self.schema.as_deref())
            .chain(std::iter::once(self.table.as_str()))
    }
}

impl Display for TableId {
    fn fmt(&self, f: &mut fmt::Formatter) -> fmt::Result {
        let parts: Vec<&str> = self.parts().collect();
        write!(f, "{}", parts.join("."))
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::collections::HashMap;

    #[test]
    fn test_display() {
        assert_eq!(
            TableId::new(Some("inventory"), None, "products").to_string(),
            "inventory.products"
        );
        assert_eq!(
            TableId::new(Some("ORCLCDB"), Some("DEBEZIUM"), "PRODUCTS").to_string(),
            "ORCLCDB.DEBEZIUM.PRODUCTS"
        );
        assert_eq!(TableId::new(None, None, "products").to_string(), "products");
    }

    #[test]
    fn test_quoted() {
        assert_eq!(
            TableId::new(Some("inventory"), None, "products").quoted(),
            "`inventory`.`products`"
        );
        assert_eq!(
            TableId::new(Some("db"), None, "we`ird").quoted(),
            "`db`.`we``ird`"
        );
    }

    #[test]
    fn test_hash_key() {
        let mut map = HashMap::new();
        map.insert(TableId::new(Some("db"), None, "a"), 1);
        map.insert(TableId::new(Some("db"), None, "b"), 2);
        map.insert(TableId::new(Some("db"), None, "a"), 3);
        assert_eq!(map.len(), 2);
        assert_eq!(map[&TableId::new(Some("db"), None, "a")], 3);
        assert!(!map.contains_key(&TableId::new(None, None, "a")));
    }
}
