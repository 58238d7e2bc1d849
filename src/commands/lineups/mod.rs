//! Saved lineup template commands

mod delete_lineup_template;
mod get_lineup_template;
mod list_lineup_templates;
mod save_lineup_template;

pub use delete_lineup_template::DeleteLineupTemplateCommand;
pub use get_lineup_template::GetLineupTemplateCommand;
pub use list_lineup_templates::ListLineupTemplatesCommand;
pub use save_lineup_template::SaveLineupTemplateCommand;
