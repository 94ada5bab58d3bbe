//! Arcade Cabinet entry point
//!
//! In the browser this drives one game on `#gameCanvas` from the animation
//! frame callback. Natively it is a headless runner that plays a game with
//! its autopilot and logs the outcome.

#[cfg(target_arch = "wasm32")]
use wasm_bindgen::prelude::*;

#[cfg(target_arch = "wasm32")]
mod web {
    use std::cell::RefCell;
    use std::rc::Rc;

    use glam::Vec2;
    use wasm_bindgen::prelude::*;
    use web_sys::{Document, HtmlCanvasElement, HtmlElement, KeyboardEvent, MouseEvent};

    use arcade_cabinet::consts::{MAX_SUBSTEPS, SIM_DT};
    use arcade_cabinet::games::{Arcade, GameKind};
    use arcade_cabinet::hud::HudItem;
    use arcade_cabinet::renderer::{DrawList, RenderState, tessellate};
    use arcade_cabinet::sim::{Key, TickInput};

    /// Restart buttons differ between pages
    const RESTART_BUTTON_IDS: [&str; 2] = ["restartBtn", "restart-btn"];

    /// Game instance plus everything the frame loop needs
    struct Driver {
        game: Box<dyn Arcade>,
        render_state: Option<RenderState>,
        draw_list: DrawList,
        input: TickInput,
        accumulator: f32,
        last_time: f64,
        document: Document,
    }

    impl Driver {
        fn new(game: Box<dyn Arcade>, document: Document) -> Self {
            Self {
                game,
                render_state: None,
                draw_list: DrawList::new(),
                input: TickInput::default(),
                accumulator: 0.0,
                last_time: 0.0,
                document,
            }
        }

        /// Run whole simulation ticks for the elapsed frame time
        fn update(&mut self, dt: f32) {
            self.accumulator += dt.min(0.1);

            let mut substeps = 0;
            while self.accumulator >= SIM_DT && substeps < MAX_SUBSTEPS {
                self.game.tick(&self.input);
                self.input.clear_one_shot();
                self.accumulator -= SIM_DT;
                substeps += 1;
            }
        }

        fn render(&mut self) {
            let Some(render_state) = self.render_state.as_mut() else {
                return;
            };
            self.game.draw(&mut self.draw_list);
            let vertices = tessellate(&self.draw_list, self.game.size());
            match render_state.render(&vertices) {
                Ok(()) => {}
                Err(wgpu::SurfaceError::Lost | wgpu::SurfaceError::Outdated) => {
                    let (w, h) = render_state.size;
                    render_state.resize(w, h);
                }
                Err(wgpu::SurfaceError::OutOfMemory) => log::error!("Out of GPU memory"),
                Err(e) => log::warn!("Render error: {e:?}"),
            }
        }

        /// Push HUD readouts into the page
        fn update_hud(&self) {
            for item in self.game.hud() {
                let Some(el) = self.document.get_element_by_id(item.id()) else {
                    continue;
                };
                match item {
                    HudItem::Text { text, .. } => {
                        if el.text_content().as_deref() != Some(text.as_str()) {
                            el.set_text_content(Some(&text));
                        }
                    }
                    HudItem::Meter { fraction, .. } => {
                        if let Ok(el) = el.dyn_into::<HtmlElement>() {
                            let width = format!("{}%", fraction * 100.0);
                            let _ = el.style().set_property("width", &width);
                        }
                    }
                    HudItem::Visible { visible, .. } => {
                        let _ = el.class_list().toggle_with_force("hidden", !visible);
                    }
                }
            }
        }

        fn restart(&mut self, seed: u64) {
            self.game.restart(seed);
            self.accumulator = 0.0;
            self.input = TickInput::default();
        }
    }

    /// Map a mouse event to playfield coordinates
    fn playfield_pos(canvas: &HtmlCanvasElement, event: &MouseEvent, playfield: Vec2) -> Vec2 {
        let rect = canvas.get_bounding_client_rect();
        let x = event.client_x() as f64 - rect.left();
        let y = event.client_y() as f64 - rect.top();
        let scale_x = if rect.width() > 0.0 { playfield.x as f64 / rect.width() } else { 1.0 };
        let scale_y = if rect.height() > 0.0 { playfield.y as f64 / rect.height() } else { 1.0 };
        Vec2::new((x * scale_x) as f32, (y * scale_y) as f32)
    }

    pub async fn run() -> Result<(), JsValue> {
        arcade_cabinet::logging::init(false);

        let window = web_sys::window().ok_or("no window")?;
        let document = window.document().ok_or("no document")?;
        let canvas: HtmlCanvasElement = document
            .get_element_by_id("gameCanvas")
            .ok_or("no #gameCanvas element")?
            .dyn_into()?;

        let kind = canvas
            .get_attribute("data-game")
            .ok_or("#gameCanvas has no data-game attribute")?
            .parse::<GameKind>()
            .map_err(|e| JsValue::from_str(&e.to_string()))?;

        let seed = js_sys::Date::now() as u64;
        let game = kind.build(seed);
        let playfield = game.size();
        log::info!("{} starting with seed {}", game.name(), seed);

        let dpr = window.device_pixel_ratio();
        let width = (canvas.client_width() as f64 * dpr) as u32;
        let height = (canvas.client_height() as f64 * dpr) as u32;
        canvas.set_width(width);
        canvas.set_height(height);

        let driver = Rc::new(RefCell::new(Driver::new(game, document.clone())));

        let instance = wgpu::Instance::new(&wgpu::InstanceDescriptor {
            backends: wgpu::Backends::BROWSER_WEBGPU | wgpu::Backends::GL,
            ..Default::default()
        });
        let surface = instance
            .create_surface(wgpu::SurfaceTarget::Canvas(canvas.clone()))
            .map_err(|e| JsValue::from_str(&e.to_string()))?;
        let adapter = instance
            .request_adapter(&wgpu::RequestAdapterOptions {
                power_preference: wgpu::PowerPreference::default(),
                compatible_surface: Some(&surface),
                force_fallback_adapter: false,
            })
            .await
            .map_err(|e| JsValue::from_str(&e.to_string()))?;
        log::info!("Using adapter: {:?}", adapter.get_info().name);

        let render_state = RenderState::new(surface, &adapter, width, height, playfield)
            .await
            .map_err(|e| JsValue::from_str(&e.to_string()))?;
        driver.borrow_mut().render_state = Some(render_state);

        setup_keyboard(&window, driver.clone());
        setup_pointer(&canvas, playfield, driver.clone());
        setup_restart_button(&document, driver.clone());

        request_animation_frame(driver);
        Ok(())
    }

    fn setup_keyboard(window: &web_sys::Window, driver: Rc<RefCell<Driver>>) {
        {
            let driver = driver.clone();
            let closure = Closure::<dyn FnMut(_)>::new(move |event: KeyboardEvent| {
                if let Some(key) = Key::from_dom(&event.key()) {
                    if matches!(key, Key::Space | Key::ArrowUp | Key::ArrowDown) {
                        event.prevent_default();
                    }
                    driver.borrow_mut().input.key_down(key);
                }
            });
            let _ = window.add_event_listener_with_callback("keydown", closure.as_ref().unchecked_ref());
            closure.forget();
        }
        {
            let closure = Closure::<dyn FnMut(_)>::new(move |event: KeyboardEvent| {
                if let Some(key) = Key::from_dom(&event.key()) {
                    driver.borrow_mut().input.key_up(key);
                }
            });
            let _ = window.add_event_listener_with_callback("keyup", closure.as_ref().unchecked_ref());
            closure.forget();
        }
    }

    fn setup_pointer(canvas: &HtmlCanvasElement, playfield: Vec2, driver: Rc<RefCell<Driver>>) {
        {
            let driver = driver.clone();
            let canvas_ref = canvas.clone();
            let closure = Closure::<dyn FnMut(_)>::new(move |event: MouseEvent| {
                let pos = playfield_pos(&canvas_ref, &event, playfield);
                driver.borrow_mut().input.pointer_move(pos);
            });
            let _ = canvas.add_event_listener_with_callback("mousemove", closure.as_ref().unchecked_ref());
            closure.forget();
        }
        {
            let driver = driver.clone();
            let canvas_ref = canvas.clone();
            let closure = Closure::<dyn FnMut(_)>::new(move |event: MouseEvent| {
                let pos = playfield_pos(&canvas_ref, &event, playfield);
                driver.borrow_mut().input.click(pos);
            });
            let _ = canvas.add_event_listener_with_callback("click", closure.as_ref().unchecked_ref());
            closure.forget();
        }
        {
            let closure = Closure::<dyn FnMut(_)>::new(move |_event: MouseEvent| {
                driver.borrow_mut().input.pointer_leave();
            });
            let _ = canvas.add_event_listener_with_callback("mouseleave", closure.as_ref().unchecked_ref());
            closure.forget();
        }
    }

    fn setup_restart_button(document: &Document, driver: Rc<RefCell<Driver>>) {
        for id in RESTART_BUTTON_IDS {
            let Some(btn) = document.get_element_by_id(id) else {
                continue;
            };
            let driver = driver.clone();
            let closure = Closure::<dyn FnMut(_)>::new(move |_event: MouseEvent| {
                driver.borrow_mut().restart(js_sys::Date::now() as u64);
            });
            let _ = btn.add_event_listener_with_callback("click", closure.as_ref().unchecked_ref());
            closure.forget();
        }
    }

    fn request_animation_frame(driver: Rc<RefCell<Driver>>) {
        let Some(window) = web_sys::window() else {
            return;
        };
        let closure = Closure::once(move |time: f64| {
            frame(driver, time);
        });
        let _ = window.request_animation_frame(closure.as_ref().unchecked_ref());
        closure.forget();
    }

    fn frame(driver: Rc<RefCell<Driver>>, time: f64) {
        {
            let mut d = driver.borrow_mut();
            let dt = if d.last_time > 0.0 {
                ((time - d.last_time) / 1000.0) as f32
            } else {
                SIM_DT
            };
            d.last_time = time;

            d.update(dt);
            d.render();
            d.update_hud();
        }

        request_animation_frame(driver);
    }
}

#[cfg(target_arch = "wasm32")]
#[wasm_bindgen(start)]
pub async fn wasm_main() -> Result<(), JsValue> {
    web::run().await
}

#[cfg(target_arch = "wasm32")]
fn main() {
    // The wasm entry point is `wasm_main`
}

#[cfg(not(target_arch = "wasm32"))]
mod headless {
    use std::path::PathBuf;

    use anyhow::Context;
    use clap::Parser;

    use arcade_cabinet::consts::TICKS_PER_SECOND;
    use arcade_cabinet::games::GameKind;
    use arcade_cabinet::hud::HudItem;
    use arcade_cabinet::renderer::DrawList;

    /// Play one of the arcade games headlessly with its autopilot
    #[derive(Debug, Parser)]
    #[command(name = "arcade-cabinet", version, about)]
    pub struct Args {
        /// Game to run: blaster, stonewall or zombie
        #[arg(short, long, default_value = "blaster")]
        pub game: GameKind,

        /// Number of fixed ticks to simulate
        #[arg(short, long, default_value_t = 3600)]
        pub ticks: u64,

        /// RNG seed
        #[arg(short, long, default_value_t = 1)]
        pub seed: u64,

        /// JSON tuning file; missing fields use the defaults
        #[arg(short, long)]
        pub config: Option<PathBuf>,

        /// Log at debug level
        #[arg(short, long)]
        pub verbose: bool,
    }

    pub fn run(args: Args) -> anyhow::Result<()> {
        arcade_cabinet::logging::init(args.verbose);

        let mut game = match &args.config {
            Some(path) => {
                let json = std::fs::read_to_string(path)
                    .with_context(|| format!("reading {}", path.display()))?;
                args.game
                    .build_from_json(&json, args.seed)
                    .with_context(|| format!("loading {} tuning from {}", args.game, path.display()))?
            }
            None => args.game.build(args.seed),
        };
        log::info!("Running {} for {} ticks (seed {})", game.name(), args.ticks, args.seed);

        let mut played = 0;
        while played < args.ticks && game.phase().is_running() {
            let input = game.autopilot();
            game.tick(&input);
            played += 1;
        }

        let mut list = DrawList::new();
        game.draw(&mut list);
        log::debug!("Final frame: {} draw commands", list.len());

        let seconds = played as f64 / TICKS_PER_SECOND as f64;
        log::info!("{} {:?} after {} ticks ({:.1}s)", game.name(), game.phase(), played, seconds);
        for item in game.hud() {
            match item {
                HudItem::Text { id, text } => log::info!("  {id}: {text}"),
                HudItem::Meter { id, fraction } => log::info!("  {id}: {:.0}%", fraction * 100.0),
                HudItem::Visible { .. } => {}
            }
        }
        Ok(())
    }
}

#[cfg(not(target_arch = "wasm32"))]
fn main() -> anyhow::Result<()> {
    use clap::Parser;

    headless::run(headless::Args::parse())
}
