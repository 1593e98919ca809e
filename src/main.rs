mod actor;
mod assets;
mod collision;
mod config;
mod cursor;
mod error;
mod gui;
mod input;
mod movement;
mod palette;
mod scene;
mod surface;
mod text;

use assets::Assets;
use config::{AssetConfig, GameConfig};
use error::{AssetError, AssetKind, GameError};
use log::{debug, error, info};
use scene::{default_registry, FrameStep, FrameTimer, SceneDriver, SceneId};
use sdl2::image::{InitFlag, LoadSurface};
use sdl2::rect::Rect;
use sdl2::video::Window;
use surface::SdlSurface;

fn main() {
    env_logger::Builder::from_env(env_logger::Env::default().default_filter_or("info")).init();

    if let Err(e) = run() {
        error!("{}", e);
        std::process::exit(1);
    }
}

fn run() -> Result<(), GameError> {
    let (config, source) = GameConfig::locate_and_load()?;
    match source {
        Some(path) => info!("Loaded config from {}", path.display()),
        None => info!("No config file found, using defaults"),
    }

    let sdl_context = sdl2::init()?;
    let video_subsystem = sdl_context.video()?;
    let _image_context = sdl2::image::init(InitFlag::PNG)?;
    let ttf_context = sdl2::ttf::init().map_err(|e| e.to_string())?;

    #[cfg(feature = "sound")]
    let audio = audio::open(&sdl_context);
    #[cfg(feature = "sound")]
    let audio_ready = audio.is_some();
    #[cfg(not(feature = "sound"))]
    let audio_ready = false;

    let (width, height) = (config.window.width, config.window.height);
    let mut window = video_subsystem
        .window(&config.window.title, width, height)
        .position_centered()
        .build()
        .map_err(|e| e.to_string())?;

    if let Some(icon) = &config.window.icon {
        set_icon(&mut window, &config.assets, icon)?;
    }

    let canvas = window.into_canvas().build().map_err(|e| e.to_string())?;
    let texture_creator = canvas.texture_creator();

    // Must outlive its use as the active cursor
    let cursor = cursor::bunny_cursor()?;
    cursor.set();
    let mouse = sdl_context.mouse();

    let mut assets = Assets::new(config.assets.clone(), &texture_creator, &ttf_context);
    assets.set_audio_enabled(audio_ready);
    if let Some(music) = &config.sounds.music {
        assets.play_music(music)?;
    }
    let mut surface = SdlSurface::new(canvas, assets);

    let window_rect = Rect::new(0, 0, width, height);
    let mut driver = SceneDriver::new(
        default_registry(),
        SceneId::Title,
        window_rect,
        &config,
        &mut surface,
    )?;
    mouse.show_cursor(driver.active().shows_cursor());

    let mut event_pump = sdl_context.event_pump()?;
    let mut timer = FrameTimer::new(config.window.fps);

    info!("Running at {}x{}, {} fps", width, height, config.window.fps);

    'running: loop {
        let frame_input = input::poll_frame(&mut event_pump);

        match driver.frame(&frame_input.events, &frame_input.held, &mut surface, &config)? {
            FrameStep::Quit => break 'running,
            FrameStep::Switched(_) => {
                mouse.show_cursor(driver.active().shows_cursor());
                if let Some(sound) = &config.sounds.transition {
                    surface.assets_mut().play_sound(sound)?;
                }
            }
            FrameStep::Rendered => surface.present(),
        }

        timer.tick();
    }

    let (fonts, texts, images) = surface.assets_mut().cache_sizes();
    debug!(
        "Cached {} fonts, {} texts, {} images at exit",
        fonts, texts, images
    );
    info!("Goodbye");
    Ok(())
}

fn set_icon(window: &mut Window, assets: &AssetConfig, name: &str) -> Result<(), AssetError> {
    let path = assets.root.join(&assets.images_dir).join(name);
    let icon = sdl2::surface::Surface::from_file(&path)
        .map_err(|e| AssetError::load(AssetKind::Image, path.display().to_string(), e))?;
    window.set_icon(icon);
    Ok(())
}

#[cfg(feature = "sound")]
mod audio {
    use log::{debug, warn};
    use sdl2::mixer::{self, InitFlag, Sdl2MixerContext, AUDIO_S16LSB, DEFAULT_CHANNELS};
    use sdl2::{AudioSubsystem, Sdl};

    const FREQUENCY: i32 = 44_100;
    const CHUNK_SIZE: i32 = 1_024;
    const MIX_CHANNELS: i32 = 8;

    /// Keeps the audio subsystem and mixer alive
    pub struct AudioContext {
        _audio: AudioSubsystem,
        _mixer: Option<Sdl2MixerContext>,
    }

    /// Opens the audio device; `None` means the game runs silent
    pub fn open(sdl_context: &Sdl) -> Option<AudioContext> {
        let audio = match sdl_context.audio() {
            Ok(audio) => audio,
            Err(e) => {
                warn!("Audio unavailable, running silent: {}", e);
                return None;
            }
        };

        if let Err(e) = mixer::open_audio(FREQUENCY, AUDIO_S16LSB, DEFAULT_CHANNELS, CHUNK_SIZE) {
            warn!("Cannot open audio device, running silent: {}", e);
            return None;
        }
        mixer::allocate_channels(MIX_CHANNELS);

        // WAV needs no decoder; OGG music does
        let mixer_context = match mixer::init(InitFlag::OGG) {
            Ok(context) => Some(context),
            Err(e) => {
                debug!("OGG decoder unavailable: {}", e);
                None
            }
        };

        Some(AudioContext {
            _audio: audio,
            _mixer: mixer_context,
        })
    }
}
