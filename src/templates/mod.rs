pub mod instances_page_template;

pub use instances_page_template::InstancesPageTemplate;
