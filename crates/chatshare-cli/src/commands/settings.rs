use anyhow::Result;
use clap::Subcommand;

use chatshare_application::PopupController;
use chatshare_core::user::SettingsForm;

#[derive(Subcommand, Debug, Clone)]
pub enum SettingsAction {
    /// Show the saved user information
    Show,
    /// Submit the user information form
    Set {
        #[arg(long)]
        age: Option<String>,
        #[arg(long)]
        location: Option<String>,
        #[arg(long)]
        gender: Option<String>,
        /// Only kept when gender is "Specify your own"
        #[arg(long)]
        custom_gender: Option<String>,
    },
}

pub async fn execute(controller: &PopupController, action: SettingsAction) -> Result<()> {
    controller.navigate_to("settings").await;

    if let SettingsAction::Set {
        age,
        location,
        gender,
        custom_gender,
    } = action
    {
        if let Some(gender) = gender.as_deref() {
            controller.gender_changed(gender);
        }
        let form = SettingsForm {
            age,
            location,
            gender,
            custom_gender,
        };
        if controller.submit_settings(form).await.is_some() {
            // Reload so the rendered form reflects what was stored.
            controller.load_settings().await;
        }
    }

    Ok(())
}
