use crate::config::AppConfig;
use anyhow::{Context, Result};
use std::fs::File;
use std::io::Read;

pub fn load_config(path: &str) -> Result<AppConfig> {
    let mut file = File::open(path).with_context(|| format!("Failed to open {}", path))?;
    let mut contents = String::new();
    file.read_to_string(&mut contents)?;
    let config: AppConfig = serde_yaml::from_str(&contents)?;
    Ok(config)
}

#[cfg(test)]
mod tests {
    use super::*;
    use cdc::source::Column;

    #[test]
    fn test_parse_config() {
        let yaml = r#"
options:
  connector: mysql-cdc
  hostname: localhost
  port: "3307"
  debezium.snapshot.mode: initial
physical_schema:
  columns:
    - name: id
      data_type: INT
      nullable: false
    - name: name
      data_type: STRING
  primary_key:
    name: pk
    columns: [id]
"#;
        let config: AppConfig = serde_yaml::from_str(yaml).unwrap();
        assert_eq!(config.options.get("port").unwrap(), "3307");
        assert_eq!(
            config.options.get("debezium.snapshot.mode").unwrap(),
            "initial"
        );
        assert_eq!(
            config.physical_schema.columns,
            vec![
                Column::not_null("id", "INT"),
                Column::nullable("name", "STRING")
            ]
        );
        assert_eq!(
            config.physical_schema.primary_key.unwrap().columns,
            vec!["id".to_string()]
        );
    }

    #[test]
    fn test_load_missing_file() {
        assert!(load_config("does/not/exist.yaml").is_err());
    }
}
