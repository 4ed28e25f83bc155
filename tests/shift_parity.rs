use chromashift::{
    ChannelOffsets, Offset2D, PixelBuffer, Rgba8, ShiftThreading, chromatic_shift,
    chromatic_shift_with,
};

fn gradient(width: u32, height: u32) -> PixelBuffer {
    let mut pixels = Vec::with_capacity((width * height) as usize);
    for y in 0..height {
        for x in 0..width {
            pixels.push(Rgba8::new(
                (3 * x + y) as u8,
                (x + 5 * y) as u8,
                (x ^ y) as u8,
                (255 - (x + y) % 9) as u8,
            ));
        }
    }
    PixelBuffer::new(width, height, pixels).unwrap()
}

fn offset_grid() -> Vec<ChannelOffsets> {
    vec![
        ChannelOffsets::default(),
        ChannelOffsets::new(
            Offset2D::horizontal(3),
            Offset2D::ZERO,
            Offset2D::horizontal(-3),
        ),
        ChannelOffsets::new(
            Offset2D::new(2, -5),
            Offset2D::new(-1, 1),
            Offset2D::new(0, 7),
        ),
        ChannelOffsets::from([Offset2D::new(-100, 100); 3]),
    ]
}

#[test]
fn parallel_shift_matches_sequential() {
    let src = gradient(64, 48);
    for offsets in offset_grid() {
        let sequential = chromatic_shift(&src, offsets);
        for threads in [None, Some(1), Some(3)] {
            let opts = ShiftThreading {
                parallel: true,
                threads,
            };
            let parallel = chromatic_shift_with(&src, offsets, &opts).unwrap();
            assert_eq!(
                parallel, sequential,
                "offsets {offsets:?} threads {threads:?}"
            );
        }
    }
}

#[test]
fn sequential_option_path_matches_direct_call() {
    let src = gradient(33, 7);
    let offsets = ChannelOffsets::new(
        Offset2D::new(1, 2),
        Offset2D::new(-2, 0),
        Offset2D::new(4, -4),
    );
    let direct = chromatic_shift(&src, offsets);
    let opted = chromatic_shift_with(&src, offsets, &ShiftThreading::default()).unwrap();
    assert_eq!(opted, direct);
}

#[test]
fn repeated_parallel_runs_are_bit_identical() {
    let src = gradient(40, 40);
    let offsets = ChannelOffsets::new(
        Offset2D::new(6, -2),
        Offset2D::new(0, 4),
        Offset2D::new(-6, 1),
    );
    let opts = ShiftThreading {
        parallel: true,
        threads: Some(4),
    };
    let first = chromatic_shift_with(&src, offsets, &opts).unwrap();
    for _ in 0..3 {
        assert_eq!(chromatic_shift_with(&src, offsets, &opts).unwrap(), first);
    }
}

#[test]
fn single_row_and_single_column_buffers_shift() {
    let row = gradient(24, 1);
    let col = gradient(1, 24);
    let offsets = ChannelOffsets::new(
        Offset2D::new(5, 5),
        Offset2D::new(-5, -5),
        Offset2D::ZERO,
    );
    for src in [row, col] {
        let sequential = chromatic_shift(&src, offsets);
        let parallel = chromatic_shift_with(
            &src,
            offsets,
            &ShiftThreading {
                parallel: true,
                threads: Some(2),
            },
        )
        .unwrap();
        assert_eq!(parallel, sequential);
        assert_eq!((parallel.width(), parallel.height()), (src.width(), src.height()));
    }
}
