use serde::{Deserialize, Deserializer};
use validator::Validate;

use crate::models::{TeacherDocument, TeacherPatch};

#[derive(Debug, Clone, Deserialize, Validate)]
pub struct CreateTeacherRequest {
    #[validate(length(min = 3, message = "Full name must be at least 3 characters"))]
    pub nombre_completo: String,

    #[validate(email(message = "Invalid email format"))]
    pub email: String,

    #[validate(length(min = 1, message = "Class is required"))]
    pub curso: String,

    #[validate(length(min = 1, message = "Add at least one subject"))]
    pub asignaturas: Vec<String>,

    #[validate(length(min = 1, message = "Add at least one school"))]
    pub colegios: Vec<String>,
}

impl From<CreateTeacherRequest> for TeacherDocument {
    fn from(request: CreateTeacherRequest) -> Self {
        TeacherDocument {
            id: None,
            nombre_completo: request.nombre_completo,
            email: request.email,
            curso: request.curso,
            asignaturas: request.asignaturas,
            colegios: request.colegios,
        }
    }
}

/// A field that may be omitted but, when present, must hold a value.
/// An explicit `null` fails deserialization like any other wrong type.
fn present<'de, D, T>(deserializer: D) -> Result<Option<T>, D::Error>
where
    D: Deserializer<'de>,
    T: Deserialize<'de>,
{
    T::deserialize(deserializer).map(Some)
}

/// Partial update body. Rules apply only to the fields that are present.
#[derive(Debug, Clone, Default, Deserialize, Validate)]
pub struct UpdateTeacherRequest {
    #[validate(length(min = 3, message = "Full name must be at least 3 characters"))]
    #[serde(default, deserialize_with = "present")]
    pub nombre_completo: Option<String>,

    #[validate(email(message = "Invalid email format"))]
    #[serde(default, deserialize_with = "present")]
    pub email: Option<String>,

    #[validate(length(min = 1, message = "Class is required"))]
    #[serde(default, deserialize_with = "present")]
    pub curso: Option<String>,

    #[validate(length(min = 1, message = "Add at least one subject"))]
    #[serde(default, deserialize_with = "present")]
    pub asignaturas: Option<Vec<String>>,

    #[validate(length(min = 1, message = "Add at least one school"))]
    #[serde(default, deserialize_with = "present")]
    pub colegios: Option<Vec<String>>,
}

impl From<UpdateTeacherRequest> for TeacherPatch {
    fn from(request: UpdateTeacherRequest) -> Self {
        TeacherPatch {
            nombre_completo: request.nombre_completo,
            email: request.email,
            curso: request.curso,
            asignaturas: request.asignaturas,
            colegios: request.colegios,
        }
    }
}
