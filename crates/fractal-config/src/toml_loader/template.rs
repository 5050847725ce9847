//! Default TOML config template with inline documentation comments.

/// Generate the default TOML config content with comments.
pub(crate) fn default_config_toml() -> String {
    r##"# Fractal Configuration
# Schema version 1
# Only override what you want to change -- missing fields use defaults.

[fractal]
# enabled = true
# depth = 4                      # 1-8, levels of five-way branching
# color = "#ffb347"
# position = [0.0, 0.0, 0.0]
# rotation_degrees = [0.0, 0.0, 0.0]

[graph]
# enabled = false
# resolution = 50                # 10-200 points per side
# function = "wave"              # wave, morphing_wave, ripple, twisted_sphere, torus
# transition_mode = "cycle"      # cycle, random
# function_duration = 1.0        # seconds, >= 0
# transition_duration = 1.0      # seconds, >= 0
# position = [3.0, 0.0, 0.0]
# color = "#4fc3f7"
# color_by_position = true

[window]
# title = "Fractal"
# width = 1280                   # 320-7680
# height = 800                   # 240-4320
# vsync = true

[camera]
# distance = 4.5                 # 0.5-100
# fov_degrees = 60.0             # 10-120
# pitch_degrees = 20.0           # -89 to 89
# yaw_degrees = 30.0
# orbit_speed = 0.0              # degrees per second, -360 to 360

[background]
# color = "#101418"

[logging]
# level = "info"                 # trace, debug, info, warn, error
# fps_interval_secs = 5          # 0 disables FPS reports
"##
    .to_string()
}
