use color_eyre::eyre::Result;

pub fn install_hooks() -> Result<()> {
    color_eyre::config::HookBuilder::default()
        .display_env_section(false)
        .install()
}
