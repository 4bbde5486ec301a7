//! Response shaping.
//!
//! Each intent selects and shapes a different subset of product fields. The
//! payload is the tagged `{status, ...}` form the chatbot has always spoken:
//! `success` carries the shaped product list, `error` carries a user-facing
//! Spanish message.

use mercabot_catalog::Product;
use serde::Serialize;
use utoipa::ToSchema;

use crate::Intent;

/// Chatbot response payload.
#[derive(Debug, Clone, Serialize, ToSchema)]
#[serde(tag = "status", rename_all = "lowercase")]
pub enum ChatReply {
    Success { productos: Vec<ProductView> },
    Error { message: String },
}

impl ChatReply {
    pub fn error(message: impl Into<String>) -> Self {
        ChatReply::Error {
            message: message.into(),
        }
    }

    /// Success when the shaped list is non-empty, otherwise the branch's
    /// not-found message.
    fn success_or(productos: Vec<ProductView>, empty_message: String) -> Self {
        if productos.is_empty() {
            ChatReply::Error {
                message: empty_message,
            }
        } else {
            ChatReply::Success { productos }
        }
    }
}

/// A per-branch projection of a [`Product`].
///
/// Only `nombre` is always present; every other field is emitted only when the
/// matched branch selects it.
#[derive(Debug, Clone, Default, Serialize, ToSchema)]
pub struct ProductView {
    pub nombre: String,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub descripcion: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub precio: Option<f64>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub disponibilidad: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub categoria: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub stock: Option<i64>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub estado: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub imagen: Option<String>,
}

/// Builds the reply for a classified intent against a catalog snapshot.
///
/// Pure function: no I/O, no retained state. An empty `productos` slice (the
/// fail-soft result of a catalog outage) simply makes every branch take its
/// not-found path.
pub fn respond(intent: Intent, productos: &[Product]) -> ChatReply {
    match intent {
        Intent::PriceRange { min, max } => {
            let encontrados = productos
                .iter()
                .filter(|p| min <= p.precio && p.precio <= max)
                .map(|p| ProductView {
                    nombre: p.nombre.clone(),
                    precio: Some(p.precio),
                    ..Default::default()
                })
                .collect();
            ChatReply::success_or(
                encontrados,
                format!("No encontré productos en el rango de {min}-{max} soles."),
            )
        }
        Intent::Category(nombre) => {
            let encontrados = productos
                .iter()
                .filter(|p| p.categoria_nombre.to_lowercase() == nombre)
                .map(|p| ProductView {
                    nombre: p.nombre.clone(),
                    descripcion: Some(p.descripcion.clone()),
                    precio: Some(p.precio),
                    categoria: Some(p.categoria_nombre.clone()),
                    ..Default::default()
                })
                .collect();
            ChatReply::success_or(
                encontrados,
                format!("No encontré productos en la categoría '{nombre}'."),
            )
        }
        Intent::ActiveStatus => {
            let encontrados = productos
                .iter()
                .map(|p| ProductView {
                    nombre: p.nombre.clone(),
                    estado: Some(if p.activo { "activo" } else { "inactivo" }.to_string()),
                    ..Default::default()
                })
                .collect();
            ChatReply::success_or(
                encontrados,
                "No encontré productos para consultar su estado.".to_string(),
            )
        }
        Intent::Stock => {
            let encontrados = productos
                .iter()
                .map(|p| ProductView {
                    nombre: p.nombre.clone(),
                    stock: Some(p.stock),
                    ..Default::default()
                })
                .collect();
            ChatReply::success_or(
                encontrados,
                "No encontré información de stock.".to_string(),
            )
        }
        Intent::Description => {
            let encontrados = productos
                .iter()
                .map(|p| ProductView {
                    nombre: p.nombre.clone(),
                    descripcion: Some(p.descripcion.clone()),
                    ..Default::default()
                })
                .collect();
            ChatReply::success_or(
                encontrados,
                "No encontré descripciones de productos.".to_string(),
            )
        }
        Intent::Availability => {
            let encontrados = productos
                .iter()
                .map(|p| ProductView {
                    nombre: p.nombre.clone(),
                    disponibilidad: Some(p.disponibilidad_descripcion.clone()),
                    ..Default::default()
                })
                .collect();
            ChatReply::success_or(
                encontrados,
                "No encontré información de disponibilidad.".to_string(),
            )
        }
        Intent::Image => {
            let encontrados = productos
                .iter()
                .map(|p| ProductView {
                    nombre: p.nombre.clone(),
                    imagen: Some(p.imagen_url.clone()),
                    ..Default::default()
                })
                .collect();
            ChatReply::success_or(
                encontrados,
                "No encontré imágenes de productos.".to_string(),
            )
        }
        Intent::Lookup(palabras) => {
            let encontrados = productos
                .iter()
                .filter(|p| {
                    let nombre = p.nombre.to_lowercase();
                    let descripcion = p.descripcion.to_lowercase();
                    palabras
                        .iter()
                        .any(|palabra| nombre.contains(palabra) || descripcion.contains(palabra))
                })
                .map(|p| ProductView {
                    nombre: p.nombre.clone(),
                    descripcion: Some(p.descripcion.clone()),
                    precio: Some(p.precio),
                    disponibilidad: Some(p.disponibilidad_descripcion.clone()),
                    ..Default::default()
                })
                .collect();
            ChatReply::success_or(
                encontrados,
                "No encontré productos que coincidan con tu consulta.".to_string(),
            )
        }
        Intent::Unknown => ChatReply::error("No puedo entender tu pregunta."),
    }
}
