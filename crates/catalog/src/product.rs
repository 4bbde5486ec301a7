//! Product wire model.
//!
//! Products are owned by the remote catalog service and fetched fresh on every
//! request; this crate only deserializes them. Field names on the wire are
//! camelCase Spanish, matching the catalog API's JSON.

use serde::Deserialize;

/// A product as returned by the catalog's active-product listing.
///
/// `nombre`, `descripcion` and `precio` are always present in the listing;
/// the remaining fields default when the catalog omits them.
#[derive(Debug, Clone, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Product {
    pub nombre: String,
    pub descripcion: String,
    pub precio: f64,
    #[serde(default)]
    pub stock: i64,
    #[serde(default)]
    pub disponibilidad_descripcion: String,
    #[serde(default)]
    pub categoria_nombre: String,
    #[serde(default)]
    pub imagen_url: String,
    #[serde(default)]
    pub activo: bool,
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn deserializes_camel_case_listing() {
        let json = r#"[
            {
                "nombre": "Pollo a la Brasa Completo",
                "descripcion": "Pollo entero con papas y ensalada",
                "precio": 55.0,
                "stock": 12,
                "disponibilidadDescripcion": "Disponible",
                "categoriaNombre": "Pollos",
                "imagenUrl": "https://example.test/pollo.jpg",
                "activo": true
            }
        ]"#;

        let products: Vec<Product> = serde_json::from_str(json).unwrap();
        assert_eq!(products.len(), 1);
        let p = &products[0];
        assert_eq!(p.nombre, "Pollo a la Brasa Completo");
        assert_eq!(p.precio, 55.0);
        assert_eq!(p.disponibilidad_descripcion, "Disponible");
        assert_eq!(p.categoria_nombre, "Pollos");
        assert!(p.activo);
    }

    #[test]
    fn optional_fields_default_when_missing() {
        let json = r#"{
            "nombre": "Inca Kola",
            "descripcion": "Gaseosa 500ml",
            "precio": 5.0
        }"#;

        let p: Product = serde_json::from_str(json).unwrap();
        assert_eq!(p.stock, 0);
        assert_eq!(p.disponibilidad_descripcion, "");
        assert_eq!(p.imagen_url, "");
        assert!(!p.activo);
    }
}
