mod board;
mod content;
mod core;
#[cfg(feature = "dev-tools")]
mod debug;
mod save;
mod stats;
mod tree;

use bevy::app::ScheduleRunnerPlugin;
use bevy::log::LogPlugin;
use bevy::prelude::*;

fn main() -> AppExit {
    let mut app = App::new();
    app.add_plugins((
        MinimalPlugins.set(ScheduleRunnerPlugin::run_once()),
        LogPlugin::default(),
    ))
    .add_plugins((
        core::CorePlugin,
        content::ContentPlugin,
        tree::PassiveTreePlugin,
        save::SavePlugin,
    ));

    #[cfg(feature = "dev-tools")]
    app.add_plugins(debug::DebugPlugin);

    app.run()
}
