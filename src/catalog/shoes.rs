use crate::scene::{Color, Group, Pen, Scene, Shape, Stop, Style};

pub(super) fn heels(scene: &mut Scene) {
    let grad = scene.linear_gradient(
        "heelsGrad",
        &[Stop::new(0.0, 0xff66a6, 1.0), Stop::new(100.0, 0xd81b60, 1.0)],
    );
    let shine = Color::WHITE.with_alpha(0.4);

    let mut g = Group::new();
    g.add(
        Shape::Path(
            Pen::at(380.0, 870.0)
                .cubic(420.0, 840.0, 500.0, 830.0, 520.0, 880.0)
                .cubic(528.0, 900.0, 520.0, 940.0, 480.0, 950.0)
                .cubic(420.0, 960.0, 360.0, 930.0, 360.0, 900.0)
                .close(),
        ),
        Style::fill(grad.clone()),
    )
    .add(
        Shape::Path(
            Pen::at(540.0, 880.0)
                .cubic(560.0, 830.0, 660.0, 830.0, 700.0, 870.0)
                .cubic(720.0, 900.0, 680.0, 960.0, 620.0, 960.0)
                .cubic(580.0, 960.0, 548.0, 930.0, 540.0, 900.0)
                .close(),
        ),
        Style::fill(grad),
    )
    .add(Shape::circle(420.0, 872.0, 12.0), Style::fill(shine))
    .add(Shape::circle(640.0, 872.0, 12.0), Style::fill(shine));
    scene.push(g);
}

pub(super) fn sneakers(scene: &mut Scene) {
    let body = Style::fill(Color::hex(0xfdfdfd)).with_stroke(Color::hex(0xd1d1d1), 6.0);

    let mut g = Group::new();
    g.add(
        Shape::Path(
            Pen::at(360.0, 880.0)
                .cubic(420.0, 820.0, 520.0, 820.0, 540.0, 880.0)
                .cubic(520.0, 920.0, 420.0, 940.0, 360.0, 910.0)
                .close(),
        ),
        body.clone(),
    )
    .add(
        Shape::Path(
            Pen::at(540.0, 880.0)
                .cubic(560.0, 820.0, 660.0, 820.0, 720.0, 880.0)
                .cubic(700.0, 930.0, 600.0, 940.0, 540.0, 910.0)
                .close(),
        ),
        body,
    );

    // Lace dots; the right shoe sits one row lower.
    let laces = [400.0, 430.0, 460.0, 490.0, 600.0, 630.0, 660.0, 690.0];
    for (idx, cx) in laces.into_iter().enumerate() {
        let row = if idx < 4 { 0.0 } else { 20.0 };
        g.add(
            Shape::circle(cx, 880.0 + row, 8.0),
            Style::fill(Color::hex(0xff6fb4)),
        );
    }

    g.add(
        Shape::rect(360.0, 900.0, 360.0, 26.0, 12.0),
        Style::fill(Color::rgba(255, 105, 180, 0.18)),
    );
    scene.push(g);
}
