//! Access control policy — pure predicates consulted by the service.
//! Owner-or-public read, owner-only write. No role overrides here; an
//! admin bypass, if ever wanted, belongs to the identity collaborator.

use uuid::Uuid;

use crate::models::resume::Resume;

pub fn can_read(requester_id: Uuid, resume: &Resume) -> bool {
    resume.is_public || requester_id == resume.owner_id
}

pub fn can_write(requester_id: Uuid, resume: &Resume) -> bool {
    requester_id == resume.owner_id
}
