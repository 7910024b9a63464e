pub mod fixtures;

use std::fs;
use std::path::{Path, PathBuf};
use std::sync::Arc;

use ratatui::Terminal;
use ratatui::backend::TestBackend;
use ratatui::buffer::Buffer;

use wsx_overflow::app::DetectRunner;
use wsx_overflow::domain::{OverflowConfig, OverflowPartition};
use wsx_overflow::infra::adapters::{FileLayoutSource, TomlConfigSource};
use wsx_overflow::ui::components::OverflowStrip;

pub const TEST_HEIGHT: u16 = 1;

pub fn write_file(dir: &Path, name: &str, content: &str) -> PathBuf {
    let path = dir.join(name);
    fs::write(&path, content).unwrap();
    path
}

pub fn create_runner(config_dir: &Path) -> DetectRunner {
    DetectRunner::new(
        Arc::new(TomlConfigSource::with_config_dir(config_dir.to_path_buf())),
        Arc::new(FileLayoutSource::new()),
    )
}

pub fn create_test_terminal(width: u16) -> Terminal<TestBackend> {
    let backend = TestBackend::new(width, TEST_HEIGHT);
    Terminal::new(backend).unwrap()
}

pub fn render_strip(
    terminal: &mut Terminal<TestBackend>,
    labels: &[&str],
    config: &OverflowConfig,
) -> (String, OverflowPartition) {
    let mut partition = OverflowPartition::empty();
    terminal
        .draw(|frame| {
            let area = frame.area();
            partition = OverflowStrip::render(frame, area, labels, config);
        })
        .unwrap();

    (buffer_to_string(terminal.backend().buffer()), partition)
}

fn buffer_to_string(buffer: &Buffer) -> String {
    let mut result = String::new();
    for y in 0..buffer.area.height {
        let mut row = String::new();
        for x in 0..buffer.area.width {
            let cell = buffer.cell((x, y)).unwrap();
            row.push_str(cell.symbol());
        }
        result.push_str(row.trim_end());
        if y < buffer.area.height - 1 {
            result.push('\n');
        }
    }
    result
}
