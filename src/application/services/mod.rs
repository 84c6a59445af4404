use std::sync::Arc;

use crate::application::{
    forms::FormSettings,
    ports::{time::Clock, urls::UrlResolver},
};
use crate::domain::{
    catalog::CatalogRepository,
    content::{ContentReadRepository, ReactionReadRepository},
    member::MemberDirectory,
    validation::ValidationReadRepository,
};

pub mod forms;

pub use forms::FormService;

/// Repository and infrastructure ports the services are wired with.
pub struct ServicePorts {
    pub contents: Arc<dyn ContentReadRepository>,
    pub reactions: Arc<dyn ReactionReadRepository>,
    pub validations: Arc<dyn ValidationReadRepository>,
    pub members: Arc<dyn MemberDirectory>,
    pub catalog: Arc<dyn CatalogRepository>,
    pub clock: Arc<dyn Clock>,
    pub urls: Arc<dyn UrlResolver>,
}

pub struct ApplicationServices {
    pub forms: Arc<FormService>,
}

impl ApplicationServices {
    pub fn new(ports: ServicePorts, settings: FormSettings) -> Self {
        let forms = Arc::new(FormService::new(
            ports.contents,
            ports.reactions,
            ports.validations,
            ports.members,
            ports.catalog,
            ports.clock,
            ports.urls,
            settings,
        ));

        Self { forms }
    }
}
