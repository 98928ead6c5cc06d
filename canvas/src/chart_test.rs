#![allow(clippy::float_cmp)]

use std::cell::RefCell;
use std::rc::Rc;

use super::*;

fn model(values: &[u64]) -> ChartModel {
    let rows = values
        .iter()
        .enumerate()
        .map(|(i, v)| (format!("L{i}"), *v));
    ChartModel::new(rows, values.iter().sum())
}

/// Records the order in which chart ids are released.
#[derive(Debug)]
struct Marker {
    id: u32,
    log: Rc<RefCell<Vec<u32>>>,
}

impl Release for Marker {
    fn release(self) {
        self.log.borrow_mut().push(self.id);
    }
}

fn marker(id: u32, log: &Rc<RefCell<Vec<u32>>>) -> Marker {
    Marker { id, log: Rc::clone(log) }
}

// =============================================================
// ChartModel
// =============================================================

#[test]
fn new_splits_rows_in_order() {
    let m = ChartModel::new(vec![("A".to_owned(), 3), ("B".to_owned(), 0)], 3);
    assert_eq!(m.labels, vec!["A", "B"]);
    assert_eq!(m.values, vec![3, 0]);
    assert_eq!(m.len(), 2);
}

#[test]
fn series_label_shows_total() {
    let m = ChartModel::new(Vec::new(), 5);
    assert_eq!(m.series_label(), "Votes (Total: 5)");
}

#[test]
fn y_ticks_for_all_zero_counts_still_span_one() {
    assert_eq!(model(&[0, 0]).y_ticks(), vec![0, 1]);
}

#[test]
fn y_ticks_step_by_one_for_small_counts() {
    assert_eq!(model(&[3, 1]).y_ticks(), vec![0, 1, 2, 3]);
}

#[test]
fn y_ticks_stay_integral_and_cover_the_max() {
    let ticks = model(&[11, 2]).y_ticks();
    assert_eq!(ticks, vec![0, 3, 6, 9, 12]);
    assert_eq!(model(&[11, 2]).y_max(), 12);
}

#[test]
fn bars_empty_model_has_no_bars() {
    assert!(ChartModel::default().bars(Rect::new(0.0, 0.0, 100.0, 100.0)).is_empty());
}

#[test]
fn bars_scale_to_plot_height_and_sit_on_axis() {
    let plot = Rect::new(0.0, 0.0, 200.0, 100.0);
    let bars = model(&[4, 2]).bars(plot);
    assert_eq!(bars.len(), 2);
    // Top tick is 4, so the first bar fills the plot and the second half of it.
    assert_eq!(bars[0].h, 100.0);
    assert_eq!(bars[1].h, 50.0);
    assert_eq!(bars[0].bottom(), 100.0);
    assert_eq!(bars[1].bottom(), 100.0);
    // Centred within 100px slots.
    assert_eq!(bars[0].w, 70.0);
    assert_eq!(bars[0].x, 15.0);
    assert_eq!(bars[1].x, 115.0);
}

#[test]
fn zero_value_bar_has_zero_height() {
    let bars = model(&[0, 3]).bars(Rect::new(0.0, 0.0, 100.0, 90.0));
    assert_eq!(bars[0].h, 0.0);
}

#[test]
fn plot_area_never_collapses_below_one_pixel() {
    let plot = plot_area(10.0, 10.0);
    assert_eq!(plot.w, 1.0);
    assert_eq!(plot.h, 1.0);
}

// =============================================================
// ChartSlot
// =============================================================

#[test]
fn install_into_empty_slot_releases_nothing() {
    let log = Rc::new(RefCell::new(Vec::new()));
    let mut slot = ChartSlot::new();
    slot.install(marker(1, &log));
    assert!(slot.is_live());
    assert!(log.borrow().is_empty());
}

#[test]
fn install_releases_previous_chart_first() {
    let log = Rc::new(RefCell::new(Vec::new()));
    let mut slot = ChartSlot::new();
    slot.install(marker(1, &log));
    slot.install(marker(2, &log));
    slot.install(marker(3, &log));
    assert_eq!(*log.borrow(), vec![1, 2]);
    assert!(slot.is_live());
    drop(slot);
    assert_eq!(*log.borrow(), vec![1, 2, 3]);
}

#[test]
fn clear_releases_and_empties() {
    let log = Rc::new(RefCell::new(Vec::new()));
    let mut slot = ChartSlot::new();
    slot.install(marker(7, &log));
    slot.clear();
    assert!(!slot.is_live());
    slot.clear();
    assert_eq!(*log.borrow(), vec![7]);
}

#[test]
fn dropping_slot_releases_live_chart() {
    let log = Rc::new(RefCell::new(Vec::new()));
    {
        let mut slot = ChartSlot::new();
        slot.install(marker(9, &log));
    }
    assert_eq!(*log.borrow(), vec![9]);
}
