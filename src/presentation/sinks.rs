// Render sinks - draw decoded channel payloads into their own view panels
use crate::application::connection_status::ConnectionStatus;
use crate::application::render_sinks::RenderSinks;
use crate::domain::payloads::{
    AlertRecord, CallFlowMessage, CallFlowTrace, CellInfo, CellValue, ChannelPayload,
    ChartSeriesBundle, CoreStatusSnapshot, EventLogPage, MetricsSnapshot, RfSampleBundle,
    SummaryText,
};
use crate::domain::status::{Severity, format_label, format_status};
use crate::domain::text::{escape_html, format_timestamp};
use crate::presentation::view::{
    AlertPanel, CellPanel, ConnectionBadge, CorePanel, DashboardView, MetricsPanel, RfCharts,
    TrendCharts,
};
use crate::presentation::widgets::{Diagram, ItemList, ListItem, Point, StatusBadge, TextField};
use tokio::sync::watch;

pub const EVENTS_SHOWN: usize = 10;
pub const ALERTS_SHOWN: usize = 5;
pub const CALL_FLOW_SHOWN: usize = 10;

const DIAGRAM_HEADER: &str =
    "sequenceDiagram\n    participant gNB\n    participant AMF\n    participant UPF\n";

/// Sinks writing into a shared [`DashboardView`]. Readers subscribe to the watch
/// channel; every render publishes the updated view.
pub struct DashboardSinks {
    view: watch::Sender<DashboardView>,
}

impl DashboardSinks {
    pub fn new() -> Self {
        let (view, _) = watch::channel(DashboardView::new());
        Self { view }
    }

    pub fn subscribe(&self) -> watch::Receiver<DashboardView> {
        self.view.subscribe()
    }
}

impl Default for DashboardSinks {
    fn default() -> Self {
        Self::new()
    }
}

impl RenderSinks for DashboardSinks {
    fn render(&self, payload: &ChannelPayload) {
        self.view.send_modify(|view| match payload {
            ChannelPayload::Metrics(metrics) => render_metrics(&mut view.metrics, metrics),
            ChannelPayload::Events(page) => render_events(&mut view.events, page),
            ChannelPayload::Summary(summary) => render_summary(&mut view.summary, summary),
            ChannelPayload::Charts(bundle) => render_trends(&mut view.trends, bundle),
            ChannelPayload::RfMetrics(rf) => render_rf(&mut view.rf, rf),
            ChannelPayload::CallFlow(trace) => render_call_flow(&mut view.call_flow, trace),
            ChannelPayload::CoreStatus(core) => render_core(&mut view.core, core),
        });
    }

    fn show_connection(&self, status: &ConnectionStatus, overlapping_ticks: u64) {
        self.view.send_modify(|view| {
            render_connection(&mut view.connection, status, overlapping_ticks)
        });
    }
}

/// The last `n` items, in their original order.
fn latest<T>(items: &[T], n: usize) -> &[T] {
    &items[items.len().saturating_sub(n)..]
}

pub fn render_status(badge: &mut StatusBadge, raw: Option<&str>) {
    badge.set_text(format_status(raw));
    badge.apply_severity(Severity::of(raw));
}

pub fn render_metrics(panel: &mut MetricsPanel, metrics: &MetricsSnapshot) {
    render_status(&mut panel.gnb_status, metrics.status.as_deref());
    render_status(&mut panel.ngap_status, metrics.ngap_status.as_deref());
    render_status(&mut panel.zmq_status, metrics.zmq_status.as_deref());
    panel.ue_count.set_text(metrics.ue_connections.to_string());

    // Without cell info the panel keeps whatever it showed before.
    if let Some(cell) = &metrics.cell_info {
        render_cell(&mut panel.cell, cell);
    }

    render_alerts(&mut panel.errors, &metrics.errors, "error");
    render_alerts(&mut panel.warnings, &metrics.warnings, "warning");
}

fn render_cell(panel: &mut CellPanel, cell: &CellInfo) {
    fn shown(value: &Option<CellValue>) -> Option<String> {
        value.as_ref().and_then(CellValue::shown)
    }
    fn or_dashes(value: Option<String>) -> String {
        value.unwrap_or_else(|| "--".to_string())
    }

    panel.pci.set_text(or_dashes(shown(&cell.pci)));
    panel
        .bandwidth
        .set_text(or_dashes(shown(&cell.bandwidth_mhz).map(|bw| format!("{} MHz", bw))));
    panel
        .band
        .set_text(or_dashes(shown(&cell.band).map(|band| format!("n{}", band))));
    panel
        .frequency
        .set_text(or_dashes(shown(&cell.dl_freq_mhz).map(|f| format!("{} MHz", f))));
    panel.arfcn.set_text(or_dashes(shown(&cell.dl_arfcn)));

    let antennas = match (shown(&cell.tx_antennas), shown(&cell.rx_antennas)) {
        (Some(tx), Some(rx)) => Some(format!("{}T{}R", tx, rx)),
        _ => None,
    };
    panel.antennas.set_text(or_dashes(antennas));
}

fn render_alerts(panel: &mut AlertPanel, alerts: &[AlertRecord], kind: &str) {
    panel.count.set_text(alerts.len().to_string());

    if alerts.is_empty() {
        panel.list.show_placeholder(format!("No {}s", kind));
        return;
    }

    let items = latest(alerts, ALERTS_SHOWN)
        .iter()
        .rev()
        .map(|alert| ListItem {
            class: format!("alert-item {}", kind),
            title: None,
            text: escape_html(&alert.message),
            timestamp: alert
                .timestamp
                .as_deref()
                .map(|ts| escape_html(&format_timestamp(ts))),
        })
        .collect();
    panel.list.replace(items);
}

pub fn render_events(list: &mut ItemList, page: &EventLogPage) {
    if page.events.is_empty() {
        list.show_placeholder("No events yet");
        return;
    }

    let items = latest(&page.events, EVENTS_SHOWN)
        .iter()
        .rev()
        .map(|event| ListItem {
            class: "event-item".to_string(),
            title: Some(escape_html(&format_label(Some(event.kind.as_str()), "Event"))),
            text: event
                .data
                .as_ref()
                .map(|data| escape_html(&data.to_string()))
                .unwrap_or_default(),
            timestamp: event
                .timestamp
                .as_deref()
                .map(|ts| escape_html(&format_timestamp(ts))),
        })
        .collect();
    list.replace(items);
}

pub fn render_summary(field: &mut TextField, summary: &SummaryText) {
    match summary.summary.as_deref() {
        Some(text) if !text.is_empty() => field.set_text(text),
        _ => field.set_text("No summary available"),
    }
}

pub fn render_trends(charts: &mut TrendCharts, bundle: &ChartSeriesBundle) {
    charts.ue.set_labels(bundle.labels.clone());
    charts.ue.set_series(0, bundle.ue_count.clone());
    charts.ue.redraw();

    charts.alerts.set_labels(bundle.labels.clone());
    charts.alerts.set_series(0, bundle.errors.clone());
    charts.alerts.set_series(1, bundle.warnings.clone());
    charts.alerts.redraw();
}

pub fn render_rf(charts: &mut RfCharts, rf: &RfSampleBundle) {
    charts.signal_power.set_series(0, rf.signal_power.clone());
    charts.signal_power.redraw();

    charts.frequency.set_series(0, rf.frequency.clone());
    charts.frequency.redraw();

    charts.channel_response.set_series(0, rf.channel_response.clone());
    charts.channel_response.redraw();

    let points = rf
        .constellation()
        .into_iter()
        .map(|(x, y)| Point { x, y })
        .collect();
    charts.constellation.set_points(points);
    charts.constellation.redraw();
}

/// Mermaid source for the most recent messages, oldest first.
pub fn build_sequence_diagram(messages: &[CallFlowMessage]) -> String {
    let mut diagram = DIAGRAM_HEADER.to_string();
    for msg in latest(messages, CALL_FLOW_SHOWN) {
        diagram.push_str(&format!(
            "    {}->>{}: {}\n",
            single_line(&msg.from),
            single_line(&msg.to),
            single_line(&msg.message)
        ));
    }
    diagram
}

fn single_line(text: &str) -> String {
    text.replace(['\r', '\n'], " ")
}

pub fn render_call_flow(diagram: &mut Diagram, trace: &CallFlowTrace) {
    if trace.messages.is_empty() {
        return;
    }
    diagram.set_source(build_sequence_diagram(&trace.messages));
    diagram.invalidate();
    diagram.process();
}

pub fn render_core(panel: &mut CorePanel, core: &CoreStatusSnapshot) {
    render_status(&mut panel.overall, core.overall.as_deref());
    render_status(&mut panel.amf, core.amf.as_deref());
    render_status(&mut panel.smf, core.smf.as_deref());
    render_status(&mut panel.upf, core.upf.as_deref());
    render_status(&mut panel.nrf, core.nrf.as_deref());
    panel
        .count
        .set_text(format!("{}/{}", core.running_count, core.total_count));
}

pub fn render_connection(
    badge: &mut ConnectionBadge,
    status: &ConnectionStatus,
    overlapping_ticks: u64,
) {
    if status.connected {
        badge.text = "Connected".to_string();
        badge.class = "status-badge connected".to_string();
    } else {
        badge.text = "Disconnected".to_string();
        badge.class = "status-badge disconnected".to_string();
    }
    if let Some(at) = status.last_update {
        badge
            .last_update
            .set_text(format!("Last update: {}", at.format("%H:%M:%S")));
    }
    badge.overlapping_ticks = overlapping_ticks;
}
