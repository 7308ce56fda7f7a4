use askama::Template;

#[derive(Template)]
#[template(path = "instances.html")]
pub struct InstancesPageTemplate;
