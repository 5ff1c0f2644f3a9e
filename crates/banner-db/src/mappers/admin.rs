//! Admin model -> entity mapper

use banner_core::{Admin, AdminId};

use crate::models::AdminModel;

/// Convert AdminModel to Admin entity
///
/// The password hash stays in the model; the entity never carries it.
impl From<AdminModel> for Admin {
    fn from(model: AdminModel) -> Self {
        Admin {
            id: AdminId::from_uuid(model.id),
            email: model.email,
            role: model.role,
            created_at: model.created_at,
            updated_at: model.updated_at,
        }
    }
}
