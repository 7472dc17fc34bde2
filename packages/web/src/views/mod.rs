mod shell;
pub use shell::{Protected, Shell};

mod home;
pub use home::{Home, NotFound};

mod onboarding;
pub use onboarding::{Login, Register, Validate};

mod clients;
pub use clients::Clients;

mod projects;
pub use projects::{ProjectDetail, Projects};

mod delivery_notes;
pub use delivery_notes::DeliveryNotes;
