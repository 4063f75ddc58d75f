//! Disk tab: usage of the root filesystem.

use ratatui::text::Line;
use sysdash_sampler::DiskStats;

use crate::ui::util::{bar, human};
use crate::ui::{heading, loading, pair, theme, value};

pub fn render(disk: Option<&DiskStats>) -> Vec<Line<'static>> {
    let Some(d) = disk else {
        return loading("disk");
    };
    vec![
        heading("Disk Information"),
        Line::default(),
        pair(
            format!("Mountpoint: {}", d.mount_path),
            format!("Filesystem: {}", d.filesystem),
        ),
        Line::default(),
        pair(
            format!("Total: {}", human(d.total_bytes)),
            format!("Free: {}", human(d.free_bytes)),
        ),
        Line::default(),
        value(format!(
            "Used: {} ({:.1}%)",
            human(d.used_bytes),
            d.used_percent
        )),
        Line::default(),
        Line::styled(bar(d.used_percent), theme::DISK),
    ]
}
