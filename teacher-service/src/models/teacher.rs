use mongodb::bson::{doc, oid::ObjectId, Document};
use serde::{Deserialize, Serialize};
use service_core::error::AppError;
use std::fmt;
use std::str::FromStr;
use thiserror::Error;

/// Storage-assigned identifier of a teacher record.
///
/// Only [`TeacherId::parse`] turns text into an id, so a raw path segment can
/// never reach a storage call.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord)]
pub struct TeacherId(ObjectId);

#[derive(Debug, Error)]
#[error("The ID '{0}' is not valid.")]
pub struct InvalidTeacherId(pub String);

impl From<InvalidTeacherId> for AppError {
    fn from(err: InvalidTeacherId) -> Self {
        AppError::BadRequest(err.into())
    }
}

impl TeacherId {
    pub fn parse(raw: &str) -> Result<Self, InvalidTeacherId> {
        ObjectId::parse_str(raw)
            .map(Self)
            .map_err(|_| InvalidTeacherId(raw.to_string()))
    }

    pub fn generate() -> Self {
        Self(ObjectId::new())
    }

    pub fn object_id(&self) -> ObjectId {
        self.0
    }

    /// Filter matching the document with this id.
    pub fn filter(&self) -> Document {
        doc! { "_id": self.0 }
    }
}

impl From<ObjectId> for TeacherId {
    fn from(oid: ObjectId) -> Self {
        Self(oid)
    }
}

impl FromStr for TeacherId {
    type Err = InvalidTeacherId;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        Self::parse(s)
    }
}

impl fmt::Display for TeacherId {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.0.to_hex())
    }
}

/// A teacher as stored in the `teachers` collection.
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq)]
pub struct TeacherDocument {
    #[serde(rename = "_id", skip_serializing_if = "Option::is_none")]
    pub id: Option<ObjectId>,
    pub nombre_completo: String,
    pub email: String,
    pub curso: String,
    pub asignaturas: Vec<String>,
    pub colegios: Vec<String>,
}

/// A teacher as returned over HTTP.
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq)]
pub struct Teacher {
    pub id: String,
    pub nombre_completo: String,
    pub email: String,
    pub curso: String,
    pub asignaturas: Vec<String>,
    pub colegios: Vec<String>,
}

impl TryFrom<TeacherDocument> for Teacher {
    type Error = AppError;

    fn try_from(document: TeacherDocument) -> Result<Self, Self::Error> {
        let id = document.id.ok_or_else(|| {
            AppError::InternalError(anyhow::anyhow!("Stored teacher has no identifier"))
        })?;

        Ok(Teacher {
            id: id.to_hex(),
            nombre_completo: document.nombre_completo,
            email: document.email,
            curso: document.curso,
            asignaturas: document.asignaturas,
            colegios: document.colegios,
        })
    }
}

/// Field-level replacement for an existing teacher. Absent fields stay as stored.
#[derive(Debug, Clone, Default, PartialEq)]
pub struct TeacherPatch {
    pub nombre_completo: Option<String>,
    pub email: Option<String>,
    pub curso: Option<String>,
    pub asignaturas: Option<Vec<String>>,
    pub colegios: Option<Vec<String>>,
}

impl TeacherPatch {
    pub fn is_empty(&self) -> bool {
        self.nombre_completo.is_none()
            && self.email.is_none()
            && self.curso.is_none()
            && self.asignaturas.is_none()
            && self.colegios.is_none()
    }

    /// The `$set` body for a MongoDB update.
    pub fn to_set_document(&self) -> Document {
        let mut set = Document::new();
        if let Some(nombre) = &self.nombre_completo {
            set.insert("nombre_completo", nombre.as_str());
        }
        if let Some(email) = &self.email {
            set.insert("email", email.as_str());
        }
        if let Some(curso) = &self.curso {
            set.insert("curso", curso.as_str());
        }
        if let Some(asignaturas) = &self.asignaturas {
            set.insert("asignaturas", asignaturas.clone());
        }
        if let Some(colegios) = &self.colegios {
            set.insert("colegios", colegios.clone());
        }
        set
    }

    pub fn apply(&self, document: &mut TeacherDocument) {
        if let Some(nombre) = &self.nombre_completo {
            document.nombre_completo = nombre.clone();
        }
        if let Some(email) = &self.email {
            document.email = email.clone();
        }
        if let Some(curso) = &self.curso {
            document.curso = curso.clone();
        }
        if let Some(asignaturas) = &self.asignaturas {
            document.asignaturas = asignaturas.clone();
        }
        if let Some(colegios) = &self.colegios {
            document.colegios = colegios.clone();
        }
    }
}
