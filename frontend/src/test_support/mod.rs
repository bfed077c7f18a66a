#[cfg(all(test, not(target_arch = "wasm32")))]
pub mod ssr;

#[cfg(test)]
pub mod helpers {
    use crate::api::{Product, ProductColor};
    use serde_json::{json, Value};

    pub fn remote_product(id: &str, name: &str) -> Product {
        Product {
            id: id.into(),
            name: name.into(),
            variant: "Limited Edition".into(),
            color: ProductColor::Red,
            features: vec!["Ultra thin".into()],
            description: "Remote catalog entry".into(),
        }
    }

    pub fn product_json(id: &str, name: &str) -> Value {
        json!({
            "id": id,
            "name": name,
            "variant": "Limited Edition",
            "color": "red",
            "features": ["Ultra thin"],
            "description": "Remote catalog entry"
        })
    }
}
