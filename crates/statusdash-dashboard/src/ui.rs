//! Dashboard composition and layout
//!
//! [`compose`] is a pure function of the snapshot, the selection, the
//! per-render context and the layout configuration. The resulting
//! [`DashboardView`] is a ratatui widget laid out on a fixed proportional
//! grid that is recomputed against the area it is rendered into:
//!
//! ```text
//! ┌ header ──────┬ Build ────────┬ Users ────────┐  18%
//! ├ Services ────────────────┬ Ports ───────────┤  43%
//! ├ Modules ┬ Controls ┬ Storage ─────────────────┤  39%
//! │         ├ Module   ├ Volumes ─────────────────┤
//! │         │ Info     │                          │
//! └─────────┴──────────┴──────────────────────────┘
//! ```

use crate::app::clamp_selection;
use crate::host::HostInfo;
use crate::widgets::{self, panels, Drawable};
use chrono::{DateTime, Utc};
use ratatui::{
    prelude::*,
    widgets::{List, ListState, Paragraph},
};
use statusdash_core::{LayoutConfig, Snapshot};

/// Values resolved once per render from the environment
#[derive(Debug, Clone)]
pub struct RenderContext {
    pub host: HostInfo,
    pub now: DateTime<Utc>,
}

impl RenderContext {
    /// Query the host and the clock
    pub fn capture() -> Self {
        Self {
            host: HostInfo::detect(),
            now: Utc::now(),
        }
    }
}

/// Screen regions of the dashboard
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct DashboardLayout {
    pub header: Rect,
    pub build: Rect,
    pub users: Rect,
    pub services: Rect,
    pub ports: Rect,
    pub modules: Rect,
    pub controls: Rect,
    pub module_info: Rect,
    pub storage: Rect,
    pub volumes: Rect,
}

impl DashboardLayout {
    pub fn new(area: Rect) -> Self {
        let [top, middle, bottom] = Layout::vertical([
            Constraint::Ratio(18, 100),
            Constraint::Ratio(43, 100),
            Constraint::Ratio(39, 100),
        ])
        .areas(area);

        let [header, build, users] = Layout::horizontal([
            Constraint::Ratio(34, 100),
            Constraint::Ratio(33, 100),
            Constraint::Ratio(33, 100),
        ])
        .areas(top);

        let [services, ports] =
            Layout::horizontal([Constraint::Ratio(60, 100), Constraint::Ratio(40, 100)])
                .areas(middle);

        let [modules, side, disk] = Layout::horizontal([
            Constraint::Ratio(25, 100),
            Constraint::Ratio(15, 100),
            Constraint::Ratio(60, 100),
        ])
        .areas(bottom);

        let [controls, module_info] =
            Layout::vertical([Constraint::Ratio(32, 100), Constraint::Ratio(68, 100)]).areas(side);

        let [storage, volumes] =
            Layout::vertical([Constraint::Ratio(513, 1000), Constraint::Ratio(487, 1000)])
                .areas(disk);

        Self {
            header,
            build,
            users,
            services,
            ports,
            modules,
            controls,
            module_info,
            storage,
            volumes,
        }
    }
}

/// Fully composed dashboard, ready to render
pub struct DashboardView {
    header: Paragraph<'static>,
    build: Paragraph<'static>,
    users: Paragraph<'static>,
    services: Box<dyn Drawable>,
    ports: Box<dyn Drawable>,
    modules: List<'static>,
    module_state: ListState,
    controls: Paragraph<'static>,
    module_info: Paragraph<'static>,
    storage: Paragraph<'static>,
    volumes: Paragraph<'static>,
}

impl DashboardView {
    /// Selection shown in the module list, after clamping
    pub fn selected_module(&self) -> Option<usize> {
        self.module_state.selected()
    }
}

/// Build the widget tree for one frame
pub fn compose(
    snapshot: &Snapshot,
    selected: Option<usize>,
    ctx: &RenderContext,
    layout: &LayoutConfig,
) -> DashboardView {
    let selected = clamp_selection(selected, snapshot.module_count());
    let (modules, module_state) = widgets::module_list(snapshot, selected);

    DashboardView {
        header: panels::header_panel(snapshot, &ctx.host),
        build: panels::build_panel(snapshot),
        users: panels::users_panel(snapshot),
        services: widgets::services_table(snapshot, layout, ctx.now)
            .into_drawable(layout.column_separators),
        ports: widgets::ports_table(snapshot).into_drawable(layout.column_separators),
        modules,
        module_state,
        controls: panels::controls_panel(),
        module_info: widgets::module_info(snapshot, selected),
        storage: panels::storage_panel(snapshot, &layout.storage_entries),
        volumes: panels::volumes_panel(snapshot, &layout.volume_entries),
    }
}

impl Widget for DashboardView {
    fn render(mut self, area: Rect, buf: &mut Buffer) {
        let regions = DashboardLayout::new(area);

        self.header.render(regions.header, buf);
        self.build.render(regions.build, buf);
        self.users.render(regions.users, buf);
        self.services.draw(regions.services, buf);
        self.ports.draw(regions.ports, buf);
        StatefulWidget::render(self.modules, regions.modules, buf, &mut self.module_state);
        self.controls.render(regions.controls, buf);
        self.module_info.render(regions.module_info, buf);
        self.storage.render(regions.storage, buf);
        self.volumes.render(regions.volumes, buf);
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use ratatui::backend::TestBackend;
    use statusdash_core::{Module, Port, Service};

    fn context() -> RenderContext {
        RenderContext {
            host: HostInfo {
                hostname: "realm-01".to_string(),
                ip: "10.0.0.5".to_string(),
            },
            now: Utc::now(),
        }
    }

    fn snapshot() -> Snapshot {
        Snapshot {
            project: "azerothcore".to_string(),
            services: vec![Service {
                name: "ac-mysql".to_string(),
                label: "MySQL".to_string(),
                status: "running".to_string(),
                health: "healthy".to_string(),
                ..Default::default()
            }],
            ports: vec![Port {
                name: "Auth".to_string(),
                port: "3724".to_string(),
                reachable: true,
            }],
            modules: vec![
                Module {
                    name: "Playerbots".to_string(),
                    description: "Bots that play".to_string(),
                    ..Default::default()
                },
                Module {
                    name: "Transmog".to_string(),
                    ..Default::default()
                },
            ],
            ..Default::default()
        }
    }

    fn screen_text(buf: &Buffer) -> String {
        let area = buf.area;
        (area.top()..area.bottom())
            .map(|y| {
                (area.left()..area.right())
                    .map(|x| buf.cell((x, y)).map(|c| c.symbol()).unwrap_or(" "))
                    .collect::<String>()
            })
            .collect::<Vec<_>>()
            .join("\n")
    }

    #[test]
    fn test_layout_covers_area() {
        let area = Rect::new(0, 0, 200, 100);
        let layout = DashboardLayout::new(area);

        assert_eq!(layout.header.y, 0);
        assert_eq!(
            layout.header.height + layout.services.height + layout.modules.height,
            100
        );
        assert_eq!(layout.header.width + layout.build.width + layout.users.width, 200);
        assert_eq!(layout.services.width + layout.ports.width, 200);
        assert_eq!(layout.controls.x, layout.module_info.x);
        assert_eq!(layout.storage.y, layout.modules.y);
        assert!(layout.volumes.y > layout.storage.y);
        assert!(layout.services.height > layout.header.height);
        assert!(layout.storage.width > layout.modules.width);
    }

    #[test]
    fn test_compose_clamps_selection() {
        let view = compose(&snapshot(), Some(9), &context(), &LayoutConfig::default());
        assert_eq!(view.selected_module(), Some(1));

        let view = compose(&Snapshot::default(), Some(0), &context(), &LayoutConfig::default());
        assert_eq!(view.selected_module(), None);
    }

    #[test]
    fn test_render_full_dashboard() {
        let backend = TestBackend::new(160, 48);
        let mut terminal = Terminal::new(backend).expect("test backend");
        let view = compose(&snapshot(), Some(0), &context(), &LayoutConfig::default());

        terminal
            .draw(|frame| frame.render_widget(view, frame.area()))
            .expect("draw");

        let text = screen_text(terminal.backend().buffer());
        for expected in [
            "Host: realm-01",
            "IP: 10.0.0.5",
            "Project: azerothcore",
            " Build ",
            " Users ",
            " Services ",
            " Ports ",
            " Modules (2) ",
            " Controls ",
            " Module Info ",
            " Storage ",
            " Volumes ",
            "MySQL",
            "healthy",
            "Playerbots",
            "Bots that play",
        ] {
            assert!(text.contains(expected), "missing {:?} in\n{}", expected, text);
        }
    }

    #[test]
    fn test_tiny_area_does_not_panic() {
        let area = Rect::new(0, 0, 10, 5);
        let mut buf = Buffer::empty(area);
        compose(&snapshot(), Some(0), &context(), &LayoutConfig::default()).render(area, &mut buf);
    }
}
