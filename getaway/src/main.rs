use getaway::config::GameConfig;
use getaway::config::SETTINGS_PATH;
use getaway::scenes::game::GameScene;
use getaway::scenes::GlobalData;
use tarmac::anyhow::Result;
use tarmac::app::ApplicationContext;
use tarmac::log::error;
use tarmac::utils::settings::SettingsStorage;
use tarmac::window::Coordinates;
use tarmac::window::WindowStyle;

fn main() {
    main_internal().unwrap();
}

fn main_internal() -> Result<()> {
    // The window initializes logging, so settings are read afterwards
    let app = ApplicationContext::<GlobalData>::new("Getaway", WindowStyle::Window { size: Coordinates::new(1280, 720) })?;

    let mut settings = SettingsStorage::new(SETTINGS_PATH);
    let config = match GameConfig::load(&mut settings) {
        Ok(config) => config,
        Err(err) => {
            error!("Invalid settings in {} ({}), falling back to defaults", SETTINGS_PATH, err);
            GameConfig::default()
        }
    };

    app.with_global(GlobalData { config }).with_scene(Box::<GameScene>::default()).run();

    Ok(())
}
