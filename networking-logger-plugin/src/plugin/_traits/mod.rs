pub mod networking_plugin;
