// Dashboard view - every widget on the page, grouped by the sink that owns it
use crate::presentation::widgets::{
    Chart, ChartKind, Diagram, ItemList, ScatterChart, StatusBadge, TextField,
};
use serde::Serialize;

/// Points kept on the RF time-series axes.
pub const RF_WINDOW: usize = 50;
/// Channel-response magnitudes, one per resource block (10 MHz carrier).
pub const RESOURCE_BLOCKS: usize = 52;

#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct ConnectionBadge {
    pub text: String,
    pub class: String,
    pub last_update: TextField,
    pub overlapping_ticks: u64,
}

#[derive(Debug, Clone, Default, PartialEq, Serialize)]
pub struct CellPanel {
    pub pci: TextField,
    pub bandwidth: TextField,
    pub band: TextField,
    pub frequency: TextField,
    pub arfcn: TextField,
    pub antennas: TextField,
}

#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct AlertPanel {
    /// Untruncated number of alerts.
    pub count: TextField,
    pub list: ItemList,
}

impl Default for AlertPanel {
    fn default() -> Self {
        Self {
            count: TextField::new("0"),
            list: ItemList::default(),
        }
    }
}

#[derive(Debug, Clone, Default, PartialEq, Serialize)]
pub struct MetricsPanel {
    pub gnb_status: StatusBadge,
    pub ngap_status: StatusBadge,
    pub zmq_status: StatusBadge,
    pub ue_count: TextField,
    pub cell: CellPanel,
    pub errors: AlertPanel,
    pub warnings: AlertPanel,
}

#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct TrendCharts {
    pub ue: Chart,
    pub alerts: Chart,
}

#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct RfCharts {
    pub signal_power: Chart,
    pub frequency: Chart,
    pub channel_response: Chart,
    pub constellation: ScatterChart,
}

#[derive(Debug, Clone, Default, PartialEq, Serialize)]
pub struct CorePanel {
    pub overall: StatusBadge,
    pub amf: StatusBadge,
    pub smf: StatusBadge,
    pub upf: StatusBadge,
    pub nrf: StatusBadge,
    pub count: TextField,
}

#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct DashboardView {
    pub connection: ConnectionBadge,
    pub metrics: MetricsPanel,
    pub events: ItemList,
    pub summary: TextField,
    pub trends: TrendCharts,
    pub rf: RfCharts,
    pub call_flow: Diagram,
    pub core: CorePanel,
}

impl DashboardView {
    /// One-time widget construction.
    pub fn new() -> Self {
        Self {
            connection: ConnectionBadge {
                text: "Connecting".to_string(),
                class: "status-badge".to_string(),
                last_update: TextField::new("Last update: --"),
                overlapping_ticks: 0,
            },
            metrics: MetricsPanel::default(),
            events: ItemList::default(),
            summary: TextField::new("Loading..."),
            trends: TrendCharts {
                ue: Chart::new(ChartKind::Line, "UE Connections Over Time", &["Connected UEs"]),
                alerts: Chart::new(ChartKind::Line, "Alerts Over Time", &["Errors", "Warnings"]),
            },
            rf: RfCharts {
                signal_power: Chart::new(ChartKind::Line, "Signal Power (RSRP)", &["RSRP (dBm)"])
                    .with_index_axis(RF_WINDOW)
                    .with_y_range(-100.0, -50.0),
                frequency: Chart::new(ChartKind::Line, "Channel Frequency", &["Frequency (MHz)"])
                    .with_index_axis(RF_WINDOW)
                    .with_y_range(1841.0, 1844.0),
                channel_response: Chart::new(
                    ChartKind::Bar,
                    "Frequency Response (52 RBs)",
                    &["Channel Response"],
                )
                .with_index_axis(RESOURCE_BLOCKS)
                .with_y_range(0.0, 1.5),
                constellation: ScatterChart::new("IQ Constellation (QPSK)", "IQ Constellation"),
            },
            call_flow: Diagram::default(),
            core: CorePanel::default(),
        }
    }
}

impl Default for DashboardView {
    fn default() -> Self {
        Self::new()
    }
}
