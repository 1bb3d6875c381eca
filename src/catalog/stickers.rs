use std::f64::consts::PI;

use crate::scene::{Color, Group, Pen, Scene, Shape, Stop, Style};

pub(super) fn star(scene: &mut Scene) {
    let sparkle = scene.radial_gradient(
        "starSparkle",
        &[
            Stop::new(0.0, 0xfff8c6, 1.0),
            Stop::new(60.0, 0xffd700, 0.95),
            Stop::new(100.0, 0xffb347, 0.6),
        ],
    );

    // Five-pointed star: alternate outer and inner radii, starting straight up.
    let points = (0..10).map(|i| {
        let angle = PI / 5.0 * f64::from(i) - PI / 2.0;
        let radius = if i % 2 == 0 { 200.0 } else { 80.0 };
        (512.0 + angle.cos() * radius, 512.0 + angle.sin() * radius)
    });

    let mut g = Group::new();
    g.add(
        Shape::polygon(points),
        Style::fill(sparkle)
            .with_stroke(Color::hex(0xffe082), 12.0)
            .round_joins(),
    );
    for i in 0..40 {
        let angle = f64::from(i * 9).to_radians();
        g.add(
            Shape::line(
                512.0,
                512.0,
                512.0 + angle.cos() * 260.0,
                512.0 + angle.sin() * 260.0,
            ),
            Style::stroke(Color::WHITE.with_alpha(0.2), 3.0),
        );
    }
    scene.push(g);
}

pub(super) fn heart(scene: &mut Scene) {
    let mut g = Group::new();
    g.add(
        Shape::ellipse(512.0, 520.0, 240.0, 220.0),
        Style::fill(Color::hex(0xff69b4)).with_opacity(0.12),
    )
    .add(
        Shape::Path(
            Pen::at(512.0, 690.0)
                .quad(360.0, 580.0, 300.0, 480.0)
                .quad(260.0, 400.0, 300.0, 330.0)
                .quad(340.0, 260.0, 420.0, 280.0)
                .quad(470.0, 295.0, 512.0, 350.0)
                .quad(554.0, 295.0, 604.0, 280.0)
                .quad(684.0, 260.0, 724.0, 330.0)
                .quad(764.0, 400.0, 724.0, 480.0)
                .quad(664.0, 580.0, 512.0, 690.0)
                .close(),
        ),
        Style::fill(Color::hex(0xff1744)).with_stroke(Color::hex(0xc62828), 5.0),
    )
    .add(
        Shape::Path(
            Pen::at(380.0, 320.0)
                .quad(410.0, 295.0, 450.0, 305.0)
                .quad(460.0, 330.0, 440.0, 345.0)
                .quad(410.0, 340.0, 380.0, 320.0)
                .close(),
        ),
        Style::fill(Color::WHITE).with_opacity(0.35),
    )
    .add(
        Shape::circle(580.0, 340.0, 8.0),
        Style::fill(Color::WHITE).with_opacity(0.4),
    )
    .add(
        Shape::circle(600.0, 380.0, 5.0),
        Style::fill(Color::WHITE).with_opacity(0.3),
    );
    scene.push(g);
}

pub(super) fn rainbow(scene: &mut Scene) {
    const BANDS: [u32; 6] = [0xff1744, 0xff9800, 0xffeb3b, 0x4caf50, 0x2196f3, 0x9c27b0];

    let mut g = Group::new();
    for (i, rgb) in BANDS.into_iter().enumerate() {
        let inset = 32.0 * i as f64;
        let (left, right, top) = (180.0 + inset, 844.0 - inset, 300.0 + inset);
        g.add(
            Shape::Path(
                Pen::at(left, 640.0)
                    .quad(left, top, 512.0, top)
                    .quad(right, top, right, 640.0)
                    .open(),
            ),
            Style::stroke(Color::hex(rgb), 32.0),
        );
    }

    // Clouds at each foot of the arc.
    for (cx, rx, ry, dy) in [
        (0.0, 70.0, 50.0, 0.0),
        (-45.0, 50.0, 38.0, 8.0),
        (50.0, 50.0, 36.0, 10.0),
    ] {
        g.add(
            Shape::ellipse(200.0 + cx, 640.0 + dy, rx, ry),
            Style::fill(Color::WHITE),
        );
        g.add(
            Shape::ellipse(824.0 - cx, 640.0 + dy, rx, ry),
            Style::fill(Color::WHITE),
        );
    }
    scene.push(g);
}
