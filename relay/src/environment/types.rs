use relay_core_contact_impl::ContactServiceImpl;
use relay_core_health_impl::HealthServiceImpl;
use relay_email_impl::EmailServiceImpl;
use relay_shared_impl::time::TimeServiceImpl;
use relay_templates_impl::TemplateServiceImpl;

// API
pub type RestServer = relay_api_rest::RestServer<Health, Contact>;

// Core
pub type Contact = ContactServiceImpl<Email, Template>;
pub type Health = HealthServiceImpl<Time>;

// Shared
pub type Email = EmailServiceImpl;
pub type Template = TemplateServiceImpl;
pub type Time = TimeServiceImpl;
