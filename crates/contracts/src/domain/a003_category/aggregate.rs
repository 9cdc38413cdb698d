use crate::domain::common::Validated;
use serde::{Deserialize, Serialize};

/// Категория каталога (дерево через `parent_id`)
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Category {
    pub id: String,
    pub name: String,
    #[serde(default)]
    pub parent_id: Option<String>,
    #[serde(default)]
    pub slug: Option<String>,
}

impl Validated for Category {
    fn record_id(&self) -> &str {
        &self.id
    }

    fn validate(&self) -> Result<(), String> {
        if self.id.trim().is_empty() {
            return Err("Category id must not be empty".into());
        }
        if self.name.trim().is_empty() {
            return Err("Category name must not be empty".into());
        }
        if self.parent_id.as_deref() == Some(self.id.as_str()) {
            return Err("Category cannot be its own parent".into());
        }
        Ok(())
    }
}

/// Ссылка товара на категорию.
///
/// Старые товары хранят категорию строкой ("Women / Dresses"), новые —
/// объектом с идентификатором и родителем. На проводе оба варианта
/// встречаются вперемешку.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(untagged)]
pub enum CategoryRef {
    Legacy(String),
    #[serde(rename_all = "camelCase")]
    Structured {
        id: String,
        name: String,
        #[serde(default)]
        parent_id: Option<String>,
    },
}

impl CategoryRef {
    /// Отображаемое имя самой категории (без предков)
    pub fn leaf_name(&self) -> &str {
        match self {
            CategoryRef::Legacy(name) => name.trim(),
            CategoryRef::Structured { name, .. } => name,
        }
    }

    /// Идентификатор категории, если он известен
    pub fn id(&self) -> Option<&str> {
        match self {
            CategoryRef::Legacy(_) => None,
            CategoryRef::Structured { id, .. } => Some(id),
        }
    }

    /// Представление ссылки как записи категории (только для структурированных)
    pub fn as_category(&self) -> Option<Category> {
        match self {
            CategoryRef::Legacy(_) => None,
            CategoryRef::Structured { id, name, parent_id } => Some(Category {
                id: id.clone(),
                name: name.clone(),
                parent_id: parent_id.clone(),
                slug: None,
            }),
        }
    }
}

impl Default for CategoryRef {
    fn default() -> Self {
        CategoryRef::Legacy(String::new())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_legacy_string_decodes() {
        let c: CategoryRef = serde_json::from_str("\" Women / Dresses \"").unwrap();
        assert_eq!(c, CategoryRef::Legacy(" Women / Dresses ".into()));
        assert_eq!(c.leaf_name(), "Women / Dresses");
        assert_eq!(c.id(), None);
        assert!(c.as_category().is_none());
    }

    #[test]
    fn test_structured_object_decodes() {
        let c: CategoryRef =
            serde_json::from_str(r#"{"id":"c3","name":"Dresses","parentId":"c2"}"#).unwrap();
        assert_eq!(c.leaf_name(), "Dresses");
        assert_eq!(c.id(), Some("c3"));
        let cat = c.as_category().unwrap();
        assert_eq!(cat.parent_id.as_deref(), Some("c2"));
    }

    #[test]
    fn test_self_parent_is_invalid() {
        let c = Category {
            id: "c1".into(),
            name: "Loop".into(),
            parent_id: Some("c1".into()),
            slug: None,
        };
        assert!(c.validate().is_err());
    }
}
