//! Paint a whole frame onto a surface

use glam::Vec2;

use super::surface::{Color, DrawSurface, Font};
use crate::sim::{GameState, Rect, bricks};

/// Draw background, bricks, paddle, ball and any end-of-game message
pub fn draw_frame<S: DrawSurface + ?Sized>(state: &GameState, surface: &mut S) {
    surface.clear_rect(Rect::new(0.0, 0.0, state.width, state.height));

    bricks::draw_all(&state.bricks, surface);

    surface.fill_rect(state.paddle.rect(), state.paddle.color);
    surface.fill_circle(state.ball.pos, state.ball.radius, state.ball.color);

    if let Some((message, color)) = state.status.message() {
        draw_message(surface, message, color, state.width, state.height);
    }
}

/// Centre `message` horizontally with its baseline at mid-height
pub fn draw_message<S: DrawSurface + ?Sized>(
    surface: &mut S,
    message: &str,
    color: Color,
    width: f32,
    height: f32,
) {
    let font = Font::message();
    let text_width = surface.measure_text_width(message, &font);
    let pos = Vec2::new(width / 2.0 - text_width / 2.0, height / 2.0);
    surface.draw_text(message, pos, &font, color);
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::config::GameConfig;
    use crate::consts::{LOSE_MESSAGE, WIN_MESSAGE};
    use crate::renderer::{DrawCommand, RecordingSurface};
    use crate::sim::GameStatus;

    #[test]
    fn test_frame_paint_order() {
        let state = GameState::new(&GameConfig::default(), 1);
        let mut surface = RecordingSurface::new();
        draw_frame(&state, &mut surface);

        let cmds = &surface.commands;
        assert_eq!(cmds.len(), 1 + 30 + 2);
        assert_eq!(
            cmds[0],
            DrawCommand::Clear(Rect::new(0.0, 0.0, state.width, state.height))
        );
        assert_eq!(
            cmds[31],
            DrawCommand::FillRect {
                rect: state.paddle.rect(),
                color: Color::Black
            }
        );
        assert_eq!(
            cmds[32],
            DrawCommand::FillCircle {
                center: state.ball.pos,
                radius: 8.0,
                color: Color::Blue
            }
        );
        assert_eq!(surface.texts().count(), 0);
    }

    #[test]
    fn test_win_message_centered() {
        let mut state = GameState::new(&GameConfig::default(), 1);
        state.bricks.clear();
        state.status = GameStatus::Won;

        let mut surface = RecordingSurface::new();
        draw_frame(&state, &mut surface);

        match surface.commands.last() {
            Some(DrawCommand::Text {
                text,
                pos,
                font,
                color,
            }) => {
                assert_eq!(text, WIN_MESSAGE);
                assert_eq!(*color, Color::Fuchsia);
                assert_eq!(font.size, 15.0);
                // 28 glyphs * 9 px = 252 px wide
                assert!((pos.x - (175.0 - 126.0)).abs() < 0.01);
                assert!((pos.y - state.height / 2.0).abs() < 0.001);
            }
            other => panic!("expected text, got {other:?}"),
        }
    }

    #[test]
    fn test_lose_message() {
        let mut state = GameState::new(&GameConfig::default(), 1);
        state.status = GameStatus::Lost;

        let mut surface = RecordingSurface::new();
        draw_frame(&state, &mut surface);
        let texts: Vec<&str> = surface.texts().collect();
        assert_eq!(texts, vec![LOSE_MESSAGE]);
    }
}
