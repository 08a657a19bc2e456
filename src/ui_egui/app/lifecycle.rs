use super::PlannerApp;
use crate::models::settings::Settings;
use crate::services::database::Database;
use crate::services::planner::Planner;
use crate::services::settings::SettingsService;
use crate::ui_egui::theme::PlannerTheme;
use anyhow::Result;
use chrono::Local;

impl PlannerApp {
    pub fn new(cc: &eframe::CreationContext<'_>) -> Result<Self> {
        let settings_service = SettingsService::from_project_dirs();
        let settings = settings_service.load();
        log::info!(
            "Loaded settings: theme={:?}, start_view={:?}",
            settings.theme,
            settings.start_view
        );

        let database = initialize_database(&settings_service, &settings)?;
        let planner = Planner::load(database, Local::now(), settings.start_view);
        log::info!("Planner ready with {} event(s)", planner.events().len());

        let theme = PlannerTheme::for_mode(settings.theme);
        theme.apply_to_context(&cc.egui_ctx);

        Ok(Self {
            planner,
            theme,
            form_error: None,
        })
    }
}

/// Open the configured database, falling back to an in-memory one so the
/// window still comes up when the file cannot be used.
fn initialize_database(service: &SettingsService, settings: &Settings) -> Result<Database> {
    let path = service.database_path(settings);

    let opened = service.ensure_data_dir().and_then(|_| {
        let db = Database::new(&path.to_string_lossy())?;
        db.initialize_schema()?;
        Ok(db)
    });

    match opened {
        Ok(db) => {
            log::info!("Using database at {}", path.display());
            Ok(db)
        }
        Err(err) => {
            log::error!(
                "Failed to open database at {}: {err:?}; events will not be saved",
                path.display()
            );
            in_memory_database()
        }
    }
}

fn in_memory_database() -> Result<Database> {
    let db = Database::new(":memory:")?;
    db.initialize_schema()?;
    Ok(db)
}
