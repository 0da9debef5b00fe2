use ratatui::layout::Rect;

/// A `width` x `height` rectangle centered in `area`, shrunk to fit.
pub fn centered_rect(width: u16, height: u16, area: Rect) -> Rect {
    let width = width.min(area.width);
    let height = height.min(area.height);
    Rect {
        x: area.x + (area.width - width) / 2,
        y: area.y + (area.height - height) / 2,
        width,
        height,
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn centers_inside_area() {
        let area = Rect::new(10, 5, 100, 40);
        assert_eq!(centered_rect(60, 20, area), Rect::new(30, 15, 60, 20));
    }

    #[test]
    fn shrinks_to_small_area() {
        let area = Rect::new(0, 0, 30, 8);
        assert_eq!(centered_rect(60, 20, area), area);
    }
}
