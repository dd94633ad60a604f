use std::cell::{Cell, RefCell};
use std::rc::Rc;

use crate::error::AppResult;
use crate::gesture::HoldTimeline;
use crate::state::{SceneStage, StageMachine};
use crate::ui::LAYOUT_TOKENS;
use gtk4::prelude::*;
use gtk4::{Application, ApplicationWindow};

mod bootstrap;
mod hero;
mod hold_control;
mod input_guard;
mod portal;
mod runtime_css;
mod stage_runtime;

use self::bootstrap::*;
use self::hero::*;
use self::hold_control::*;
use self::input_guard::*;
use self::portal::*;
use self::runtime_css::*;
use self::stage_runtime::*;

pub struct App {
    machine: StageMachine,
}

impl App {
    pub fn new() -> Self {
        Self {
            machine: StageMachine::new(),
        }
    }

    pub fn start(&mut self) -> AppResult<()> {
        let bootstrap = bootstrap_app_runtime();
        let shared_machine = Rc::new(RefCell::new(std::mem::take(&mut self.machine)));
        let machine_for_activate = shared_machine.clone();
        let activate_once = Rc::new(Cell::new(false));

        tracing::info!("starting gtk runtime");
        let application = Application::new(
            Some("com.centrix.portal"),
            gtk4::gio::ApplicationFlags::NON_UNIQUE,
        );

        application.connect_activate(move |app| {
            if activate_once.replace(true) {
                tracing::debug!("ignoring duplicate gtk activate signal");
                return;
            }
            let tokens = LAYOUT_TOKENS;
            install_runtime_css(tokens, &bootstrap.color_tokens);

            let window = ApplicationWindow::new(app);
            window.add_css_class("centrix-root");
            window.add_css_class(stage_css_class(SceneStage::Idle));
            window.set_title(Some("Centrix"));
            window.set_default_size(tokens.window_default_width, tokens.window_default_height);

            let hero = build_hero_ui(tokens, &bootstrap.assets);
            window.set_child(Some(&hero.root));

            let portal_view = PortalView::at_rest();
            install_portal_draw_func(
                &hero.portal_canvas,
                hero.project_image.clone(),
                portal_view.clone(),
                bootstrap.paint_palette,
                tokens,
            );

            let runtime = StageRuntime {
                machine: machine_for_activate.clone(),
                window: window.clone(),
                portal_canvas: hero.portal_canvas.clone(),
                portal_view,
                hold_entry: hero.hold_entry.clone(),
                scroller: hero.scroller.clone(),
                page_root: hero.page_root.clone(),
                content_section: hero.content_section.clone(),
                expand_loop: Rc::new(RefCell::new(None)),
                scroll_loop: Rc::new(RefCell::new(None)),
                tokens,
            };

            let completion_runtime = runtime.clone();
            connect_hold_control(HoldControlContext {
                ring: hero.hold_ring.clone(),
                timeline: Rc::new(RefCell::new(HoldTimeline::new(bootstrap.hold_duration))),
                displayed_progress: Rc::new(Cell::new(0.0)),
                frame_loop: Rc::new(RefCell::new(None)),
                palette: bootstrap.paint_palette,
                tokens,
                on_complete: Rc::new(move || handle_hold_completed(&completion_runtime)),
            });

            let guard = InputGuard::install(&window);
            window.connect_close_request(move |_| {
                guard.release();
                gtk4::glib::Propagation::Proceed
            });

            if bootstrap.fullscreen {
                window.fullscreen();
            }
            hero.hold_ring.grab_focus();
            tracing::info!("presenting portal window");
            window.present();
        });

        // Pass only argv[0] to GTK; configuration comes from config.json, not argv.
        let gtk_args = gtk_launch_args();
        application.run_with_args(&gtk_args);

        self.machine = std::mem::take(&mut *shared_machine.borrow_mut());
        Ok(())
    }

    pub fn machine(&self) -> &StageMachine {
        &self.machine
    }
}

impl Default for App {
    fn default() -> Self {
        Self::new()
    }
}

fn gtk_launch_args() -> Vec<String> {
    std::env::args().take(1).collect()
}
