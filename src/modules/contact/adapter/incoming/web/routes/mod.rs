mod submit_contact;

pub use submit_contact::{
    __path_submit_contact_handler, submit_contact_handler, ContactSubmissionData,
    SubmitContactRequest,
};
