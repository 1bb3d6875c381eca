use crate::scene::{Color, Group, Pen, Scene, Shape, Stop, Style};

pub(super) fn long_blonde(scene: &mut Scene) {
    let hair = scene.linear_gradient(
        "longHair",
        &[
            Stop::new(0.0, 0xfff2b0, 1.0),
            Stop::new(40.0, 0xffd161, 1.0),
            Stop::new(100.0, 0xf7b733, 1.0),
        ],
    );

    let mut g = Group::new();
    g.add(
        Shape::Path(
            Pen::at(340.0, 160.0)
                .cubic(320.0, 280.0, 330.0, 420.0, 360.0, 520.0)
                .cubic(260.0, 520.0, 260.0, 780.0, 360.0, 870.0)
                .cubic(420.0, 920.0, 600.0, 940.0, 680.0, 860.0)
                .cubic(760.0, 780.0, 744.0, 520.0, 660.0, 520.0)
                .cubic(690.0, 420.0, 700.0, 280.0, 680.0, 160.0)
                .cubic(600.0, 100.0, 420.0, 100.0, 340.0, 160.0)
                .close(),
        ),
        Style::fill(hair),
    )
    .add(
        Shape::Path(
            Pen::at(360.0, 220.0)
                .cubic(390.0, 180.0, 634.0, 180.0, 664.0, 220.0)
                .cubic(674.0, 260.0, 674.0, 320.0, 660.0, 360.0)
                .cubic(600.0, 310.0, 420.0, 310.0, 360.0, 360.0)
                .cubic(346.0, 320.0, 346.0, 260.0, 360.0, 220.0)
                .close(),
        ),
        Style::fill(Color::WHITE.with_alpha(0.35)),
    );

    for wave in 0..6 {
        let x = 360.0 + f64::from(wave) * 60.0;
        g.add(
            Shape::Path(
                Pen::at(x, 260.0)
                    .cubic(x - 20.0, 420.0, x + 60.0, 620.0, x, 780.0)
                    .open(),
            ),
            Style::stroke(Color::WHITE.with_alpha(0.2), 12.0),
        );
    }
    scene.push(g);
}

pub(super) fn bun(scene: &mut Scene) {
    let base = scene.linear_gradient(
        "bunBase",
        &[Stop::new(0.0, 0x6d3b1f, 1.0), Stop::new(100.0, 0xa25f2a, 1.0)],
    );

    let mut g = Group::new();
    g.add(
        Shape::Path(
            Pen::at(360.0, 220.0)
                .cubic(370.0, 160.0, 654.0, 160.0, 664.0, 220.0)
                .line(676.0, 380.0)
                .cubic(644.0, 430.0, 380.0, 430.0, 348.0, 380.0)
                .close(),
        ),
        Style::fill(base),
    )
    .add(
        Shape::ellipse(512.0, 180.0, 110.0, 70.0),
        Style::fill(Color::hex(0x8c4a24)),
    )
    .add(
        Shape::circle(512.0, 150.0, 72.0),
        Style::fill(Color::hex(0xb26a38)),
    )
    .add(
        Shape::Path(
            Pen::at(420.0, 250.0)
                .cubic(420.0, 400.0, 604.0, 400.0, 604.0, 250.0)
                .open(),
        ),
        Style::fill(Color::BLACK.with_alpha(0.1)),
    );

    for ring in 0..5 {
        let ring = f64::from(ring);
        g.add(
            Shape::ellipse(512.0, 150.0, 72.0 - ring * 10.0, 60.0 - ring * 8.0),
            Style::stroke(Color::WHITE.with_alpha(0.08), 4.0),
        );
    }
    scene.push(g);
}

pub(super) fn crown(scene: &mut Scene) {
    let gold = Color::hex(0xffd700);
    let gold_edge = Color::hex(0xf9a825);
    let ruby = Color::hex(0xe91e63);
    let ruby_edge = Color::hex(0xc2185b);

    let mut g = Group::new();
    g.add(
        Shape::Path(
            Pen::at(380.0, 215.0)
                .line(380.0, 248.0)
                .quad(512.0, 260.0, 644.0, 248.0)
                .line(644.0, 215.0)
                .quad(512.0, 200.0, 380.0, 215.0)
                .close(),
        ),
        Style::fill(gold).with_stroke(gold_edge, 3.0),
    );

    let points: [[(f64, f64); 3]; 5] = [
        [(380.0, 218.0), (360.0, 160.0), (400.0, 200.0)],
        [(440.0, 210.0), (430.0, 145.0), (460.0, 198.0)],
        [(512.0, 206.0), (512.0, 132.0), (540.0, 200.0)],
        [(584.0, 210.0), (594.0, 145.0), (564.0, 198.0)],
        [(644.0, 218.0), (664.0, 160.0), (624.0, 200.0)],
    ];
    for tri in points {
        g.add(
            Shape::polygon(tri),
            Style::fill(gold).with_stroke(gold_edge, 2.0),
        );
    }

    g.add(
        Shape::ellipse(512.0, 152.0, 14.0, 10.0),
        Style::fill(ruby).with_stroke(ruby_edge, 2.0),
    )
    .add(
        Shape::ellipse(512.0, 150.0, 8.0, 6.0),
        Style::fill(Color::hex(0xff80ab)).with_opacity(0.7),
    );

    for cx in [437.0, 587.0] {
        g.add(
            Shape::circle(cx, 165.0, 8.0),
            Style::fill(Color::hex(0x7c4dff)).with_stroke(Color::hex(0x651fff), 1.5),
        );
    }

    let teal = Color::hex(0x00bcd4);
    let teal_edge = Color::hex(0x0097a7);
    g.add(
        Shape::circle(420.0, 232.0, 7.0),
        Style::fill(teal).with_stroke(teal_edge, 1.5),
    )
    .add(
        Shape::circle(512.0, 228.0, 9.0),
        Style::fill(ruby).with_stroke(ruby_edge, 1.5),
    )
    .add(
        Shape::circle(604.0, 232.0, 7.0),
        Style::fill(teal).with_stroke(teal_edge, 1.5),
    )
    .add(
        Shape::Path(Pen::at(382.0, 220.0).quad(512.0, 210.0, 642.0, 220.0).open()),
        Style::stroke(Color::hex(0xfff9c4), 2.0).with_opacity(0.6),
    );
    scene.push(g);
}
