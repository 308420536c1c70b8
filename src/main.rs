//! Incline Sim entry point
//!
//! Web: interactive canvas driven by `requestAnimationFrame`.
//! Native: headless scripted session that prints a JSON summary.

#[cfg(target_arch = "wasm32")]
use wasm_bindgen::prelude::*;

#[cfg(target_arch = "wasm32")]
mod web {
    use std::cell::RefCell;
    use std::rc::Rc;

    use glam::Vec2;
    use wasm_bindgen::prelude::*;
    use web_sys::{HtmlCanvasElement, KeyboardEvent, MouseEvent};

    use incline_sim::consts::{CANVAS_HEIGHT, CANVAS_WIDTH};
    use incline_sim::platform::TickGate;
    use incline_sim::renderer::{DrawList, RenderState, SceneOptions, TextOverlay, draw_scene};
    use incline_sim::sim::Flow;
    use incline_sim::ui::{InputEvent, Key};
    use incline_sim::{AppContext, AppError, Result, Settings};

    /// Browser session: the context plus renderer handles
    struct WebApp {
        ctx: AppContext,
        scene_options: SceneOptions,
        render_state: RenderState,
        overlay: TextOverlay,
        frame: DrawList,
        /// Events since the last tick
        pending: Vec<InputEvent>,
        gate: TickGate,
    }

    impl WebApp {
        /// Run one tick if a tick boundary has passed. Returns false on quit.
        fn on_frame(&mut self, time: f64) -> bool {
            if !self.gate.ready(time) {
                return true;
            }

            let events = std::mem::take(&mut self.pending);
            let report = self.ctx.tick(&events);
            if report.flow == Flow::Quit {
                log::info!("Quit at tick {}", self.ctx.sim.tick_count);
                return false;
            }

            draw_scene(
                &mut self.frame,
                &self.ctx.snapshot(),
                &self.ctx.buttons,
                &self.scene_options,
            );
            match self.render_state.render(&self.frame) {
                Ok(()) => {}
                Err(wgpu::SurfaceError::Lost) => {
                    let (w, h) = self.render_state.size;
                    self.render_state.resize(w, h);
                }
                Err(wgpu::SurfaceError::OutOfMemory) => {
                    log::error!("Out of memory!");
                }
                Err(e) => log::warn!("Render error: {:?}", e),
            }
            self.overlay.draw(&self.frame);
            true
        }
    }

    fn canvas_by_id(document: &web_sys::Document, id: &str) -> Result<HtmlCanvasElement> {
        document
            .get_element_by_id(id)
            .ok_or_else(|| AppError::RenderInit(format!("no #{id} element")))?
            .dyn_into::<HtmlCanvasElement>()
            .map_err(|_| AppError::RenderInit(format!("#{id} is not a canvas")))
    }

    /// Canvas pixel coordinates of a click, independent of CSS scaling
    fn click_position(canvas: &HtmlCanvasElement, event: &MouseEvent) -> Vec2 {
        let scale_x = CANVAS_WIDTH / canvas.client_width().max(1) as f32;
        let scale_y = CANVAS_HEIGHT / canvas.client_height().max(1) as f32;
        Vec2::new(
            event.offset_x() as f32 * scale_x,
            event.offset_y() as f32 * scale_y,
        )
    }

    fn key_from_event(event: &KeyboardEvent) -> Option<Key> {
        let key = event.key();
        match key.as_str() {
            " " => Some(Key::Space),
            "Escape" => Some(Key::Escape),
            _ => {
                let mut chars = key.chars();
                match (chars.next(), chars.next()) {
                    (Some(c), None) => Some(Key::Char(c)),
                    _ => None,
                }
            }
        }
    }

    async fn init() -> Result<Rc<RefCell<WebApp>>> {
        let window = web_sys::window().ok_or_else(|| AppError::RenderInit("no window".into()))?;
        let document = window
            .document()
            .ok_or_else(|| AppError::RenderInit("no document".into()))?;

        let canvas = canvas_by_id(&document, "canvas")?;
        let hud_canvas = canvas_by_id(&document, "hud-canvas")?;
        let (width, height) = (CANVAS_WIDTH as u32, CANVAS_HEIGHT as u32);
        canvas.set_width(width);
        canvas.set_height(height);

        let instance = wgpu::Instance::new(&wgpu::InstanceDescriptor {
            backends: wgpu::Backends::BROWSER_WEBGPU | wgpu::Backends::GL,
            ..Default::default()
        });

        let surface = instance
            .create_surface(wgpu::SurfaceTarget::Canvas(canvas.clone()))
            .map_err(|e| AppError::RenderInit(format!("create_surface: {e}")))?;

        let adapter = instance
            .request_adapter(&wgpu::RequestAdapterOptions {
                power_preference: wgpu::PowerPreference::LowPower,
                compatible_surface: Some(&surface),
                force_fallback_adapter: false,
            })
            .await
            .map_err(|e| AppError::RenderInit(format!("request_adapter: {e}")))?;

        log::info!("Using adapter: {:?}", adapter.get_info().name);

        let render_state =
            RenderState::new(surface, &adapter, width, height, (CANVAS_WIDTH, CANVAS_HEIGHT))
                .await?;
        let overlay = TextOverlay::new(&hud_canvas, width, height)?;

        let ctx = AppContext::new(Settings::default());
        let app = WebApp {
            scene_options: ctx.scene_options(),
            gate: TickGate::new(ctx.settings.tick_rate_hz),
            ctx,
            render_state,
            overlay,
            frame: DrawList::new(),
            pending: Vec::new(),
        };
        let app = Rc::new(RefCell::new(app));

        // Clicks land on the overlay, which sits above the WebGPU canvas
        setup_input_handlers(&hud_canvas, app.clone());
        Ok(app)
    }

    fn setup_input_handlers(canvas: &HtmlCanvasElement, app: Rc<RefCell<WebApp>>) {
        // Mouse click
        {
            let app = app.clone();
            let canvas_clone = canvas.clone();
            let closure = Closure::<dyn FnMut(_)>::new(move |event: MouseEvent| {
                let pos = click_position(&canvas_clone, &event);
                app.borrow_mut().pending.push(InputEvent::pointer(pos));
            });
            let _ = canvas
                .add_event_listener_with_callback("mousedown", closure.as_ref().unchecked_ref());
            closure.forget();
        }

        // Keyboard
        if let Some(window) = web_sys::window() {
            let closure = Closure::<dyn FnMut(_)>::new(move |event: KeyboardEvent| {
                if let Some(key) = key_from_event(&event) {
                    app.borrow_mut().pending.push(InputEvent::Key(key));
                }
            });
            let _ = window
                .add_event_listener_with_callback("keydown", closure.as_ref().unchecked_ref());
            closure.forget();
        }
    }

    fn request_animation_frame(app: Rc<RefCell<WebApp>>) {
        let Some(window) = web_sys::window() else {
            return;
        };
        let closure = Closure::once(move |time: f64| {
            let keep_going = app.borrow_mut().on_frame(time);
            if keep_going {
                request_animation_frame(app);
            }
        });
        let _ = window.request_animation_frame(closure.as_ref().unchecked_ref());
        closure.forget();
    }

    pub async fn run() {
        console_error_panic_hook::set_once();
        let _ = console_log::init_with_level(log::Level::Info);

        log::info!("Incline Sim starting...");

        match init().await {
            Ok(app) => {
                request_animation_frame(app);
                log::info!("Incline Sim running!");
            }
            Err(e) => log::error!("{e}"),
        }
    }
}

#[cfg(target_arch = "wasm32")]
#[wasm_bindgen(start)]
pub async fn wasm_main() {
    web::run().await;
}

#[cfg(target_arch = "wasm32")]
fn main() {
    // WASM entry point is wasm_main, this is just to satisfy the compiler
}

#[cfg(not(target_arch = "wasm32"))]
mod native {
    use incline_sim::platform::{Script, ScriptedFrontend};
    use incline_sim::{AppContext, AppError, Result, Settings, run};

    const USAGE: &str = "\
usage: incline-sim [options]

  --settings <file>   JSON settings (partial documents allowed)
  --script <file>     JSON input script: [{\"tick\": n, \"event\": ...}]
  --ticks <n>         close after n ticks (default 600)
  --trace <n>         print a JSON snapshot every n ticks
  --realtime          pace ticks at the configured rate
  -h, --help          show this help";

    #[derive(Debug, Default)]
    struct Options {
        settings: Option<String>,
        script: Option<String>,
        ticks: Option<u64>,
        trace: Option<u64>,
        realtime: bool,
        help: bool,
    }

    fn parse_args(args: impl IntoIterator<Item = String>) -> Result<Options> {
        let mut options = Options::default();
        let mut args = args.into_iter();
        while let Some(arg) = args.next() {
            let mut value = |name: &str| {
                args.next()
                    .ok_or_else(|| AppError::Script(format!("{name} needs a value")))
            };
            match arg.as_str() {
                "--settings" => options.settings = Some(value("--settings")?),
                "--script" => options.script = Some(value("--script")?),
                "--ticks" => options.ticks = Some(parse_count("--ticks", &value("--ticks")?)?),
                "--trace" => options.trace = Some(parse_count("--trace", &value("--trace")?)?),
                "--realtime" => options.realtime = true,
                "-h" | "--help" => options.help = true,
                other => return Err(AppError::Script(format!("unknown argument: {other}"))),
            }
        }
        Ok(options)
    }

    fn parse_count(name: &str, value: &str) -> Result<u64> {
        value
            .parse()
            .map_err(|_| AppError::Script(format!("{name} expects a number, got {value}")))
    }

    pub fn run_session() -> Result<()> {
        let options = parse_args(std::env::args().skip(1))?;
        if options.help {
            println!("{USAGE}");
            return Ok(());
        }

        let settings = match &options.settings {
            Some(path) => Settings::load_from(path)?,
            None => Settings::default(),
        };
        let script = match &options.script {
            Some(path) => Script::load_from(path)?,
            None => Script::new(),
        };
        log::info!("Loaded {} scripted events", script.len());

        let mut frontend = ScriptedFrontend::new(script).quit_after(options.ticks.unwrap_or(600));
        if let Some(every) = options.trace {
            frontend = frontend.record_every(every);
        }
        if options.realtime {
            frontend = frontend.realtime(settings.tick_rate_hz);
        }

        let mut ctx = AppContext::new(settings);
        frontend = frontend.scene_options(ctx.scene_options());
        let summary = run(&mut ctx, &mut frontend)?;

        for snapshot in frontend.take_recorded() {
            println!("{}", serde_json::to_string(&snapshot)?);
        }
        println!("{}", serde_json::to_string_pretty(&summary)?);
        Ok(())
    }

    #[cfg(test)]
    mod tests {
        use super::*;

        fn args(list: &[&str]) -> Vec<String> {
            list.iter().map(|s| s.to_string()).collect()
        }

        #[test]
        fn test_parse_args() {
            let options = parse_args(args(&["--ticks", "120", "--trace", "30", "--realtime"])).unwrap();
            assert_eq!(options.ticks, Some(120));
            assert_eq!(options.trace, Some(30));
            assert!(options.realtime);
            assert!(options.settings.is_none());
        }

        #[test]
        fn test_parse_args_errors() {
            assert!(parse_args(args(&["--ticks"])).is_err());
            assert!(parse_args(args(&["--ticks", "many"])).is_err());
            assert!(parse_args(args(&["--bogus"])).is_err());
        }
    }
}

#[cfg(not(target_arch = "wasm32"))]
fn main() {
    env_logger::init();
    log::info!("Incline Sim (native, headless) starting...");

    if let Err(e) = native::run_session() {
        log::error!("{e}");
        eprintln!("error: {e}");
        std::process::exit(1);
    }
}
