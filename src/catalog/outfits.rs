use crate::scene::{Color, Group, Pen, Scene, Shape, Stop, Style};

const WHITE: Color = Color::WHITE;

pub(super) fn princess(scene: &mut Scene) {
    let skirt = scene.linear_gradient(
        "princessSkirt",
        &[
            Stop::new(0.0, 0xffb3f2, 1.0),
            Stop::new(50.0, 0xf36dd5, 1.0),
            Stop::new(100.0, 0xbf5fff, 1.0),
        ],
    );
    let bodice = scene.linear_gradient(
        "princessBodice",
        &[Stop::new(0.0, 0xffd1fb, 1.0), Stop::new(100.0, 0xe05cd6, 1.0)],
    );

    let mut g = Group::new();
    g.add(
        Shape::Path(
            Pen::at(390.0, 350.0)
                .cubic(420.0, 300.0, 604.0, 300.0, 634.0, 350.0)
                .line(664.0, 530.0)
                .cubic(590.0, 560.0, 442.0, 560.0, 370.0, 530.0)
                .close(),
        ),
        Style::fill(bodice),
    )
    .add(
        Shape::rect(470.0, 330.0, 84.0, 50.0, 26.0),
        Style::fill(Color::hex(0xffe5ff)).with_opacity(0.85),
    )
    .add(
        Shape::circle(512.0, 385.0, 18.0),
        Style::fill(Color::hex(0xffdcdc)),
    )
    .add(
        Shape::Path(
            Pen::at(320.0, 520.0)
                .cubic(280.0, 700.0, 300.0, 880.0, 360.0, 930.0)
                .line(664.0, 930.0)
                .cubic(716.0, 864.0, 734.0, 688.0, 702.0, 520.0)
                .close(),
        ),
        Style::fill(skirt),
    );

    // Ruffle tiers.
    for dy in [0.0, 40.0, 80.0] {
        g.add(
            Shape::Path(
                Pen::at(340.0, 600.0 + dy)
                    .cubic(360.0, 560.0 + dy, 664.0, 560.0 + dy, 684.0, 600.0 + dy)
                    .line(682.0, 640.0 + dy)
                    .cubic(620.0, 700.0 + dy, 404.0, 700.0 + dy, 342.0, 640.0 + dy)
                    .close(),
            ),
            Style::fill(WHITE.with_alpha(0.22)),
        );
    }

    for x in (360..680).step_by(60).map(f64::from) {
        g.add(
            Shape::Path(
                Pen::at(x, 720.0)
                    .cubic(x - 30.0, 690.0, x - 10.0, 650.0, x, 660.0)
                    .cubic(x + 10.0, 650.0, x + 30.0, 690.0, x, 720.0)
                    .close(),
            ),
            Style::fill(WHITE.with_alpha(0.35)),
        );
    }

    g.add(
        Shape::ellipse(512.0, 540.0, 130.0, 26.0),
        Style::fill(WHITE.with_alpha(0.4)),
    );
    scene.push(g);
}

pub(super) fn jeans(scene: &mut Scene) {
    let top = scene.linear_gradient(
        "topGradient",
        &[
            Stop::new(0.0, 0xffde7d, 1.0),
            Stop::new(50.0, 0xff8fb1, 1.0),
            Stop::new(100.0, 0xff66a6, 1.0),
        ],
    );
    let belt = scene.linear_gradient(
        "beltGrad",
        &[Stop::new(0.0, 0xffe082, 1.0), Stop::new(100.0, 0xfbc02d, 1.0)],
    );

    let mut g = Group::new();
    g.add(
        Shape::Path(
            Pen::at(400.0, 360.0)
                .cubic(430.0, 320.0, 594.0, 320.0, 624.0, 360.0)
                .line(640.0, 520.0)
                .cubic(576.0, 540.0, 448.0, 540.0, 384.0, 520.0)
                .close(),
        ),
        Style::fill(top),
    )
    .add(
        Shape::Path(
            Pen::at(384.0, 520.0)
                .line(640.0, 520.0)
                .line(664.0, 860.0)
                .cubic(636.0, 900.0, 386.0, 900.0, 358.0, 860.0)
                .close(),
        ),
        Style::fill(Color::hex(0x3a6ba5)),
    )
    .add(
        Shape::rect(380.0, 520.0, 264.0, 40.0, 18.0),
        Style::fill(Color::hex(0x2a4f7a)),
    )
    .add(
        Shape::rect(388.0, 520.0, 248.0, 22.0, 12.0),
        Style::fill(belt),
    )
    .add(
        Shape::circle(512.0, 534.0, 12.0),
        Style::fill(Color::hex(0xd172c2)),
    );

    // Denim highlights.
    for i in 0..4 {
        g.add(
            Shape::rect(410.0 + f64::from(i) * 60.0, 574.0, 28.0, 90.0, 14.0),
            Style::fill(WHITE.with_alpha(0.2)),
        );
    }

    g.add(
        Shape::Path(
            Pen::at(380.0, 520.0)
                .line(360.0, 860.0)
                .cubic(380.0, 900.0, 644.0, 900.0, 664.0, 860.0)
                .line(640.0, 520.0)
                .close(),
        ),
        Style::stroke(WHITE.with_alpha(0.15), 6.0),
    )
    .add(Shape::circle(430.0, 410.0, 18.0), Style::fill(WHITE))
    .add(
        Shape::circle(470.0, 400.0, 12.0),
        Style::fill(Color::hex(0xffd54f)),
    )
    .add(
        Shape::circle(610.0, 400.0, 14.0),
        Style::fill(Color::hex(0x64b5f6)),
    );
    scene.push(g);
}

pub(super) fn ballet(scene: &mut Scene) {
    let leo = scene.linear_gradient(
        "balletLeo",
        &[Stop::new(0.0, 0xffd1e8, 1.0), Stop::new(100.0, 0xff85c1, 1.0)],
    );
    let tutu = scene.radial_gradient(
        "balletTutu",
        &[
            Stop::new(0.0, 0xffe6f3, 1.0),
            Stop::new(70.0, 0xff9bcf, 0.9),
            Stop::new(100.0, 0xff6fb4, 0.8),
        ],
    );

    let mut g = Group::new();
    g.add(
        Shape::Path(
            Pen::at(420.0, 360.0)
                .cubic(440.0, 320.0, 584.0, 320.0, 604.0, 360.0)
                .line(620.0, 560.0)
                .cubic(560.0, 600.0, 464.0, 600.0, 404.0, 560.0)
                .close(),
        ),
        Style::fill(leo),
    )
    .add(
        Shape::Path(
            Pen::at(340.0, 600.0)
                .cubic(320.0, 700.0, 340.0, 840.0, 512.0, 860.0)
                .cubic(684.0, 840.0, 704.0, 700.0, 684.0, 600.0)
                .close(),
        ),
        Style::fill(tutu).with_opacity(0.92),
    );

    // Tulle rays fanning out from the waist.
    for deg in (0..360).step_by(12).map(f64::from) {
        let a = deg.to_radians();
        let len = 160.0 + 20.0 * (2.0 * a).sin();
        g.add(
            Shape::line(
                512.0 + 10.0 * a.cos(),
                620.0 + 10.0 * a.sin(),
                512.0 + len * a.cos(),
                620.0 + len * a.sin(),
            ),
            Style::stroke(WHITE.with_alpha(0.25), 4.0),
        );
    }

    g.add(
        Shape::ellipse(512.0, 620.0, 150.0, 34.0),
        Style::fill(WHITE.with_alpha(0.6)),
    );
    scene.push(g);
}
