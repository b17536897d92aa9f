// SPDX-License-Identifier: MPL-2.0
//! Demo block behavior: copying, folding and text fields.

use demo_preview::ui::demo_preview::{
    CollapsiblePanel, Demo, DemoPreviewBlock, Event, HeightStyle, Layout, Message, UpdateContext,
};
use demo_preview::ui::notifications::ToastRegistry;
use std::time::{Duration, Instant};

const SOURCE: &str = "<template>\n  <el-button>Default</el-button>\n</template>";

fn mounted_block(layout: Layout, now: Instant) -> DemoPreviewBlock {
    let mut block = DemoPreviewBlock::new(Demo::plain("button-basic", SOURCE), layout, true);
    block.mount(now);
    block
}

#[test]
fn copy_returns_raw_source_and_opens_one_toast() {
    let now = Instant::now();
    let mut toasts = ToastRegistry::new("Copied!");
    let mut block = mounted_block(Layout::Titled, now);

    let event = block.update(
        Message::Copy,
        UpdateContext {
            toasts: &mut toasts,
            now,
        },
    );

    assert_eq!(event, Event::CopyToClipboard(SOURCE.to_string()));
    assert_eq!(toasts.len(), 1);
    let toast = toasts.active().next().expect("one toast");
    assert_eq!(toast.content(), "Copied!");
    assert_eq!(toast.top_offset(), 10.0);
}

#[test]
fn panel_folds_between_measured_height_and_zero() {
    let start = Instant::now();
    let mut panel = CollapsiblePanel::new(true);
    panel.mount(240.0, start);
    assert_eq!(panel.height_style(), Some(HeightStyle::px(0.0)));

    assert!(panel.set_folded(false, start));
    assert_eq!(panel.height_style().map(|s| s.to_string()).as_deref(), Some("240px"));

    let settled = start + Duration::from_secs(1);
    assert_eq!(panel.displayed_height(settled), Some(240.0));

    assert!(panel.set_folded(true, settled));
    assert_eq!(panel.height_style().map(|s| s.to_string()).as_deref(), Some("0px"));
    assert!(!panel.set_folded(true, settled));
}

#[test]
fn expanding_before_mount_measures_zero() {
    let now = Instant::now();
    let mut panel = CollapsiblePanel::new(true);
    panel.set_folded(false, now);
    assert_eq!(panel.height_style(), Some(HeightStyle::px(0.0)));
}

#[test]
fn block_fold_messages_drive_its_panel() {
    let now = Instant::now();
    let mut toasts = ToastRegistry::new("Copied!");
    let mut block = mounted_block(Layout::Header, now);
    let expanded = block.demo().markup.measured_height();

    let event = block.update(
        Message::ToggleFold,
        UpdateContext {
            toasts: &mut toasts,
            now,
        },
    );
    assert_eq!(event, Event::None);
    assert!(!block.panel().is_folded());
    assert_eq!(block.panel().height_style(), Some(HeightStyle::px(expanded)));
    assert!(toasts.is_empty());
}

#[test]
fn text_fields_per_layout() {
    let now = Instant::now();
    let mut demo = Demo::plain("button-basic", SOURCE);
    demo.title = Some(String::new());
    demo.description = None;

    let mut block = DemoPreviewBlock::new(demo.clone(), Layout::Titled, true);
    block.mount(now);
    let text = block.text("Default title", "Default description");
    assert_eq!(text.title, None);
    assert_eq!(text.description, Some("Default description"));
    assert!(text.split_line);

    let minimal = DemoPreviewBlock::new(demo.clone(), Layout::Minimal, true);
    let text = minimal.text("Default title", "Default description");
    assert_eq!((text.title, text.description), (None, None));
    assert!(text.split_line);

    let header = DemoPreviewBlock::new(demo, Layout::Header, true);
    let text = header.text("Default title", "Default description");
    assert_eq!(text.description, Some("Default description"));
    assert!(!text.split_line);
}
