mod template;

pub use template::DocumentNumberTemplate;
