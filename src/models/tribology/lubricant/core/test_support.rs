/// A lubricant from the reference sample set with its pinned results.
#[derive(Debug, Clone, Copy)]
pub(crate) struct Sample {
    pub(crate) label: &'static str,
    pub(crate) visc40: f64,
    pub(crate) visc100: f64,
    pub(crate) visc60: f64,
    pub(crate) vi: i32,
    pub(crate) m: f64,
    pub(crate) vtc: f64,
}

pub(crate) const SAMPLES: [Sample; 8] = [
    Sample {
        label: "Naphthenic spindle oil",
        visc40: 30.0,
        visc100: 4.24,
        visc60: 13.106_436_594_316_93,
        vi: -25,
        m: 4.246_689_872_842_634,
        vtc: 0.858_666_666_666_666_6,
    },
    Sample {
        label: "Paraffinic spindle oil",
        visc40: 30.0,
        visc100: 5.23,
        visc60: 14.525_050_356_114_84,
        vi: 104,
        m: 3.672_253_988_411_221,
        vtc: 0.825_666_666_666_666_7,
    },
    Sample {
        label: "Medium solvent extract",
        visc40: 120.0,
        visc100: 8.0,
        visc60: 36.994_893_672_864_07,
        vi: -49,
        m: 4.471_342_479_163_651,
        vtc: 0.933_333_333_333_333_3,
    },
    Sample {
        label: "Medium polyglycol",
        visc40: 120.0,
        visc100: 20.9,
        visc60: 59.513_819_898_260_76,
        vi: 200,
        m: 2.527_094_431_233_902,
        vtc: 0.825_833_333_333_333_3,
    },
    Sample {
        label: "Medium silicone oil",
        visc40: 120.0,
        visc100: 50.0,
        visc60: 86.381_930_610_732_27,
        vi: 423,
        m: 1.140_934_822_849_597_2,
        vtc: 0.583_333_333_333_333_4,
    },
    Sample {
        label: "Multigrade motor oil",
        visc40: 70.0,
        visc100: 11.1,
        visc60: 32.920_101_094_961_1,
        vi: 150,
        m: 3.086_793_535_035_930_3,
        vtc: 0.841_428_571_428_571_4,
    },
    Sample {
        label: "Ester oil",
        visc40: 30.0,
        visc100: 5.81,
        visc60: 15.272_805_433_721_16,
        vi: 139,
        m: 3.397_418_615_099_038_4,
        vtc: 0.806_333_333_333_333_3,
    },
    Sample {
        label: "Tribology-ABC",
        visc40: 68.0,
        visc100: 8.6,
        visc60: 28.645_677_945_260_45,
        vi: 96,
        m: 3.607_994_993_423_344_6,
        vtc: 0.873_529_411_764_705_9,
    },
];
