use crate::scene::{Color, Group, Pen, Scene, Shape, Stop, Style};

pub(super) fn glasses(scene: &mut Scene) {
    let frame = Color::hex(0xff82c3);
    let lens = Style::fill(Color::WHITE.with_alpha(0.05)).with_stroke(frame, 18.0);
    let arm = Style::stroke(frame, 18.0).round_caps();

    let mut g = Group::translated(0.0, -40.0);
    g.add(Shape::ellipse(420.0, 320.0, 90.0, 80.0), lens.clone())
        .add(Shape::ellipse(604.0, 320.0, 90.0, 80.0), lens)
        .add(
            Shape::rect(506.0, 300.0, 92.0, 24.0, 12.0),
            Style::fill(frame),
        )
        .add(
            Shape::Path(
                Pen::at(330.0, 320.0)
                    .cubic(280.0, 320.0, 250.0, 300.0, 220.0, 280.0)
                    .open(),
            ),
            arm.clone(),
        )
        .add(
            Shape::Path(
                Pen::at(694.0, 320.0)
                    .cubic(744.0, 320.0, 774.0, 300.0, 804.0, 280.0)
                    .open(),
            ),
            arm,
        )
        .add(
            Shape::circle(362.0, 300.0, 10.0),
            Style::fill(Color::hex(0xffd1e8)),
        )
        .add(
            Shape::circle(662.0, 300.0, 10.0),
            Style::fill(Color::hex(0xffd1e8)),
        );
    scene.push(g);
}

pub(super) fn handbag(scene: &mut Scene) {
    let body = scene.linear_gradient(
        "bagBody",
        &[Stop::new(0.0, 0xff9dc8, 1.0), Stop::new(100.0, 0xff5fa2, 1.0)],
    );

    let mut g = Group::new();
    g.add(
        Shape::rect(580.0, 600.0, 160.0, 150.0, 40.0),
        Style::fill(body),
    )
    .add(
        Shape::Path(
            Pen::at(600.0, 600.0)
                .cubic(600.0, 520.0, 720.0, 520.0, 720.0, 600.0)
                .open(),
        ),
        Style::stroke(Color::hex(0xffc9e1), 26.0).round_caps(),
    )
    .add(
        Shape::circle(660.0, 672.0, 18.0),
        Style::fill(Color::hex(0xffe082)),
    )
    .add(
        Shape::Path(
            Pen::at(620.0, 640.0)
                .line(700.0, 640.0)
                .line(690.0, 700.0)
                .cubic(660.0, 730.0, 640.0, 730.0, 610.0, 700.0)
                .close(),
        ),
        Style::fill(Color::WHITE.with_alpha(0.2)),
    )
    .add(
        Shape::circle(620.0, 620.0, 10.0),
        Style::fill(Color::hex(0xffeef7)),
    );
    scene.push(g);
}
