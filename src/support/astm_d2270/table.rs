//! ASTM D2270 Table 1: L and H values for kinematic viscosity at 100 °C
//! from 2 cSt to 70 cSt.

use super::LhConstants;

pub(super) static ROWS: [LhConstants; 311] = [
    LhConstants::new(2.00, 7.994, 6.394),
    LhConstants::new(2.10, 8.640, 6.894),
    LhConstants::new(2.20, 9.309, 7.410),
    LhConstants::new(2.30, 10.00, 7.944),
    LhConstants::new(2.40, 10.71, 8.496),
    LhConstants::new(2.50, 11.45, 9.063),
    LhConstants::new(2.60, 12.21, 9.647),
    LhConstants::new(2.70, 13.00, 10.25),
    LhConstants::new(2.80, 13.80, 10.87),
    LhConstants::new(2.90, 14.63, 11.50),
    LhConstants::new(3.00, 15.49, 12.15),
    LhConstants::new(3.10, 16.36, 12.82),
    LhConstants::new(3.20, 17.26, 13.51),
    LhConstants::new(3.30, 18.18, 14.21),
    LhConstants::new(3.40, 19.12, 14.93),
    LhConstants::new(3.50, 20.09, 15.66),
    LhConstants::new(3.60, 21.08, 16.42),
    LhConstants::new(3.70, 22.09, 17.19),
    LhConstants::new(3.80, 23.13, 17.97),
    LhConstants::new(3.90, 24.19, 18.77),
    LhConstants::new(4.00, 25.32, 19.56),
    LhConstants::new(4.10, 26.50, 20.37),
    LhConstants::new(4.20, 27.75, 21.21),
    LhConstants::new(4.30, 29.07, 22.05),
    LhConstants::new(4.40, 30.48, 22.92),
    LhConstants::new(4.50, 31.96, 23.81),
    LhConstants::new(4.60, 33.52, 24.71),
    LhConstants::new(4.70, 35.13, 25.63),
    LhConstants::new(4.80, 36.79, 26.57),
    LhConstants::new(4.90, 38.50, 27.53),
    LhConstants::new(5.00, 40.23, 28.49),
    LhConstants::new(5.10, 41.99, 29.46),
    LhConstants::new(5.20, 43.76, 30.43),
    LhConstants::new(5.30, 45.53, 31.40),
    LhConstants::new(5.40, 47.31, 32.37),
    LhConstants::new(5.50, 49.09, 33.34),
    LhConstants::new(5.60, 50.87, 34.32),
    LhConstants::new(5.70, 52.64, 35.29),
    LhConstants::new(5.80, 54.42, 36.26),
    LhConstants::new(5.90, 56.20, 37.23),
    LhConstants::new(6.00, 57.97, 38.19),
    LhConstants::new(6.10, 59.74, 39.17),
    LhConstants::new(6.20, 61.52, 40.15),
    LhConstants::new(6.30, 63.32, 41.13),
    LhConstants::new(6.40, 65.18, 42.14),
    LhConstants::new(6.50, 67.12, 43.18),
    LhConstants::new(6.60, 69.16, 44.24),
    LhConstants::new(6.70, 71.29, 45.33),
    LhConstants::new(6.80, 73.48, 46.44),
    LhConstants::new(6.90, 75.72, 47.51),
    LhConstants::new(7.00, 78.00, 48.57),
    LhConstants::new(7.10, 80.25, 49.61),
    LhConstants::new(7.20, 82.39, 50.69),
    LhConstants::new(7.30, 84.53, 51.78),
    LhConstants::new(7.40, 86.66, 52.88),
    LhConstants::new(7.50, 88.85, 53.98),
    LhConstants::new(7.60, 91.04, 55.09),
    LhConstants::new(7.70, 93.20, 56.20),
    LhConstants::new(7.80, 95.43, 57.31),
    LhConstants::new(7.90, 97.72, 58.45),
    LhConstants::new(8.00, 100.0, 59.60),
    LhConstants::new(8.10, 102.3, 60.74),
    LhConstants::new(8.20, 104.6, 61.89),
    LhConstants::new(8.30, 106.9, 63.05),
    LhConstants::new(8.40, 109.2, 64.18),
    LhConstants::new(8.50, 111.5, 65.32),
    LhConstants::new(8.60, 113.9, 66.48),
    LhConstants::new(8.70, 116.2, 67.64),
    LhConstants::new(8.80, 118.5, 68.79),
    LhConstants::new(8.90, 120.9, 69.94),
    LhConstants::new(9.00, 123.3, 71.10),
    LhConstants::new(9.10, 125.7, 72.27),
    LhConstants::new(9.20, 128.0, 73.42),
    LhConstants::new(9.30, 130.4, 74.57),
    LhConstants::new(9.40, 132.8, 75.73),
    LhConstants::new(9.50, 135.3, 76.91),
    LhConstants::new(9.60, 137.7, 78.08),
    LhConstants::new(9.70, 140.1, 79.27),
    LhConstants::new(9.80, 142.7, 80.46),
    LhConstants::new(9.90, 145.2, 81.67),
    LhConstants::new(10.0, 147.7, 82.87),
    LhConstants::new(10.1, 150.3, 84.08),
    LhConstants::new(10.2, 152.9, 85.30),
    LhConstants::new(10.3, 155.4, 86.51),
    LhConstants::new(10.4, 158.0, 87.72),
    LhConstants::new(10.5, 160.6, 88.95),
    LhConstants::new(10.6, 163.2, 90.19),
    LhConstants::new(10.7, 165.8, 91.40),
    LhConstants::new(10.8, 168.5, 92.65),
    LhConstants::new(10.9, 171.2, 93.92),
    LhConstants::new(11.0, 173.9, 95.19),
    LhConstants::new(11.1, 176.6, 96.45),
    LhConstants::new(11.2, 179.4, 97.71),
    LhConstants::new(11.3, 182.1, 98.97),
    LhConstants::new(11.4, 184.9, 100.2),
    LhConstants::new(11.5, 187.6, 101.5),
    LhConstants::new(11.6, 190.4, 102.8),
    LhConstants::new(11.7, 193.3, 104.1),
    LhConstants::new(11.8, 196.2, 105.4),
    LhConstants::new(11.9, 199.0, 106.7),
    LhConstants::new(12.0, 201.9, 108.0),
    LhConstants::new(12.1, 204.8, 109.4),
    LhConstants::new(12.2, 207.8, 110.7),
    LhConstants::new(12.3, 210.7, 112.0),
    LhConstants::new(12.4, 213.6, 113.3),
    LhConstants::new(12.5, 216.6, 114.7),
    LhConstants::new(12.6, 219.6, 116.0),
    LhConstants::new(12.7, 222.6, 117.4),
    LhConstants::new(12.8, 225.7, 118.7),
    LhConstants::new(12.9, 228.8, 120.1),
    LhConstants::new(13.0, 231.9, 121.5),
    LhConstants::new(13.1, 235.0, 122.9),
    LhConstants::new(13.2, 238.1, 124.2),
    LhConstants::new(13.3, 241.2, 125.6),
    LhConstants::new(13.4, 244.3, 127.0),
    LhConstants::new(13.5, 247.4, 128.4),
    LhConstants::new(13.6, 250.6, 129.8),
    LhConstants::new(13.7, 253.8, 131.2),
    LhConstants::new(13.8, 257.0, 132.6),
    LhConstants::new(13.9, 260.1, 134.0),
    LhConstants::new(14.0, 263.3, 135.4),
    LhConstants::new(14.1, 266.6, 136.8),
    LhConstants::new(14.2, 269.8, 138.2),
    LhConstants::new(14.3, 273.0, 139.6),
    LhConstants::new(14.4, 276.3, 141.0),
    LhConstants::new(14.5, 279.6, 142.4),
    LhConstants::new(14.6, 283.0, 143.9),
    LhConstants::new(14.7, 286.4, 145.3),
    LhConstants::new(14.8, 289.7, 146.8),
    LhConstants::new(14.9, 293.0, 148.2),
    LhConstants::new(15.0, 296.5, 149.7),
    LhConstants::new(15.1, 300.0, 151.2),
    LhConstants::new(15.2, 303.4, 152.6),
    LhConstants::new(15.3, 306.9, 154.1),
    LhConstants::new(15.4, 310.3, 155.6),
    LhConstants::new(15.5, 313.9, 157.0),
    LhConstants::new(15.6, 317.5, 158.6),
    LhConstants::new(15.7, 321.1, 160.1),
    LhConstants::new(15.8, 324.6, 161.6),
    LhConstants::new(15.9, 328.3, 163.1),
    LhConstants::new(16.0, 331.9, 164.6),
    LhConstants::new(16.1, 335.5, 166.1),
    LhConstants::new(16.2, 339.2, 167.7),
    LhConstants::new(16.3, 342.9, 169.2),
    LhConstants::new(16.4, 346.6, 170.7),
    LhConstants::new(16.5, 350.3, 172.3),
    LhConstants::new(16.6, 354.1, 173.8),
    LhConstants::new(16.7, 358.0, 175.4),
    LhConstants::new(16.8, 361.7, 177.0),
    LhConstants::new(16.9, 365.6, 178.6),
    LhConstants::new(17.0, 369.4, 180.2),
    LhConstants::new(17.1, 373.3, 181.7),
    LhConstants::new(17.2, 377.1, 183.3),
    LhConstants::new(17.3, 381.0, 184.9),
    LhConstants::new(17.4, 384.9, 186.5),
    LhConstants::new(17.5, 388.9, 188.1),
    LhConstants::new(17.6, 392.7, 189.7),
    LhConstants::new(17.7, 396.7, 191.3),
    LhConstants::new(17.8, 400.7, 192.9),
    LhConstants::new(17.9, 404.6, 194.6),
    LhConstants::new(18.0, 408.6, 196.2),
    LhConstants::new(18.1, 412.6, 197.8),
    LhConstants::new(18.2, 416.7, 199.4),
    LhConstants::new(18.3, 420.7, 201.0),
    LhConstants::new(18.4, 424.9, 202.6),
    LhConstants::new(18.5, 429.0, 204.3),
    LhConstants::new(18.6, 433.2, 205.9),
    LhConstants::new(18.7, 437.3, 207.6),
    LhConstants::new(18.8, 441.5, 209.3),
    LhConstants::new(18.9, 445.7, 211.0),
    LhConstants::new(19.0, 449.9, 212.7),
    LhConstants::new(19.1, 454.2, 214.4),
    LhConstants::new(19.2, 458.4, 216.1),
    LhConstants::new(19.3, 462.7, 217.7),
    LhConstants::new(19.4, 467.0, 219.4),
    LhConstants::new(19.5, 471.3, 221.1),
    LhConstants::new(19.6, 475.7, 222.8),
    LhConstants::new(19.7, 479.7, 224.5),
    LhConstants::new(19.8, 483.9, 226.2),
    LhConstants::new(19.9, 488.6, 227.7),
    LhConstants::new(20.0, 493.2, 229.5),
    LhConstants::new(20.2, 501.5, 233.0),
    LhConstants::new(20.4, 510.8, 236.4),
    LhConstants::new(20.6, 519.9, 240.1),
    LhConstants::new(20.8, 528.8, 243.5),
    LhConstants::new(21.0, 538.4, 247.1),
    LhConstants::new(21.2, 547.5, 250.7),
    LhConstants::new(21.4, 556.7, 254.2),
    LhConstants::new(21.6, 566.4, 257.8),
    LhConstants::new(21.8, 575.6, 261.5),
    LhConstants::new(22.0, 585.2, 264.9),
    LhConstants::new(22.2, 595.0, 268.6),
    LhConstants::new(22.4, 604.3, 272.3),
    LhConstants::new(22.6, 614.2, 275.8),
    LhConstants::new(22.8, 624.1, 279.6),
    LhConstants::new(23.0, 633.6, 283.3),
    LhConstants::new(23.2, 643.4, 286.8),
    LhConstants::new(23.4, 653.8, 290.5),
    LhConstants::new(23.6, 663.3, 294.4),
    LhConstants::new(23.8, 673.7, 297.9),
    LhConstants::new(24.0, 683.9, 301.8),
    LhConstants::new(24.2, 694.5, 305.6),
    LhConstants::new(24.4, 704.2, 309.4),
    LhConstants::new(24.6, 714.9, 313.0),
    LhConstants::new(24.8, 725.7, 317.0),
    LhConstants::new(25.0, 736.5, 320.9),
    LhConstants::new(25.2, 747.2, 324.9),
    LhConstants::new(25.4, 758.2, 328.8),
    LhConstants::new(25.6, 769.3, 332.7),
    LhConstants::new(25.8, 779.7, 336.7),
    LhConstants::new(26.0, 790.4, 340.5),
    LhConstants::new(26.2, 801.6, 344.4),
    LhConstants::new(26.4, 812.8, 348.4),
    LhConstants::new(26.6, 824.1, 352.3),
    LhConstants::new(26.8, 835.5, 356.4),
    LhConstants::new(27.0, 847.0, 360.5),
    LhConstants::new(27.2, 857.5, 364.6),
    LhConstants::new(27.4, 869.0, 368.3),
    LhConstants::new(27.6, 880.6, 372.3),
    LhConstants::new(27.8, 892.3, 376.4),
    LhConstants::new(28.0, 904.1, 380.6),
    LhConstants::new(28.2, 915.8, 384.6),
    LhConstants::new(28.4, 927.6, 388.8),
    LhConstants::new(28.6, 938.6, 393.0),
    LhConstants::new(28.8, 951.2, 396.6),
    LhConstants::new(29.0, 963.4, 401.1),
    LhConstants::new(29.2, 975.4, 405.3),
    LhConstants::new(29.4, 987.1, 409.5),
    LhConstants::new(29.6, 998.9, 413.5),
    LhConstants::new(29.8, 1011.0, 417.6),
    LhConstants::new(30.0, 1023.0, 421.7),
    LhConstants::new(30.5, 1055.0, 432.4),
    LhConstants::new(31.0, 1086.0, 443.2),
    LhConstants::new(31.5, 1119.0, 454.0),
    LhConstants::new(32.0, 1151.0, 464.9),
    LhConstants::new(32.5, 1184.0, 475.9),
    LhConstants::new(33.0, 1217.0, 487.0),
    LhConstants::new(33.5, 1251.0, 498.1),
    LhConstants::new(34.0, 1286.0, 509.6),
    LhConstants::new(34.5, 1321.0, 521.1),
    LhConstants::new(35.0, 1356.0, 532.5),
    LhConstants::new(35.5, 1391.0, 544.0),
    LhConstants::new(36.0, 1427.0, 555.6),
    LhConstants::new(36.5, 1464.0, 567.1),
    LhConstants::new(37.0, 1501.0, 579.3),
    LhConstants::new(37.5, 1538.0, 591.3),
    LhConstants::new(38.0, 1575.0, 603.1),
    LhConstants::new(38.5, 1613.0, 615.0),
    LhConstants::new(39.0, 1651.0, 627.1),
    LhConstants::new(39.5, 1691.0, 639.2),
    LhConstants::new(40.0, 1730.0, 651.8),
    LhConstants::new(40.5, 1770.0, 664.2),
    LhConstants::new(41.0, 1810.0, 676.6),
    LhConstants::new(41.5, 1851.0, 689.1),
    LhConstants::new(42.0, 1892.0, 701.9),
    LhConstants::new(42.5, 1935.0, 714.9),
    LhConstants::new(43.0, 1978.0, 728.2),
    LhConstants::new(43.5, 2021.0, 741.3),
    LhConstants::new(44.0, 2064.0, 754.4),
    LhConstants::new(44.5, 2108.0, 767.6),
    LhConstants::new(45.0, 2152.0, 780.9),
    LhConstants::new(45.5, 2197.0, 794.5),
    LhConstants::new(46.0, 2243.0, 808.2),
    LhConstants::new(46.5, 2288.0, 821.9),
    LhConstants::new(47.0, 2333.0, 835.5),
    LhConstants::new(47.5, 2380.0, 849.2),
    LhConstants::new(48.0, 2426.0, 863.0),
    LhConstants::new(48.5, 2473.0, 876.9),
    LhConstants::new(49.0, 2521.0, 890.9),
    LhConstants::new(49.5, 2570.0, 905.3),
    LhConstants::new(50.0, 2618.0, 919.6),
    LhConstants::new(50.5, 2667.0, 933.6),
    LhConstants::new(51.0, 2717.0, 948.2),
    LhConstants::new(51.5, 2767.0, 962.9),
    LhConstants::new(52.0, 2817.0, 977.5),
    LhConstants::new(52.5, 2867.0, 992.1),
    LhConstants::new(53.0, 2918.0, 1007.0),
    LhConstants::new(53.5, 2969.0, 1021.0),
    LhConstants::new(54.0, 3020.0, 1036.0),
    LhConstants::new(54.5, 3073.0, 1051.0),
    LhConstants::new(55.0, 3126.0, 1066.0),
    LhConstants::new(55.5, 3180.0, 1082.0),
    LhConstants::new(56.0, 3233.0, 1097.0),
    LhConstants::new(56.5, 3286.0, 1112.0),
    LhConstants::new(57.0, 3340.0, 1127.0),
    LhConstants::new(57.5, 3396.0, 1143.0),
    LhConstants::new(58.0, 3452.0, 1159.0),
    LhConstants::new(58.5, 3507.0, 1175.0),
    LhConstants::new(59.0, 3563.0, 1190.0),
    LhConstants::new(59.5, 3619.0, 1206.0),
    LhConstants::new(60.0, 3676.0, 1222.0),
    LhConstants::new(60.5, 3734.0, 1238.0),
    LhConstants::new(61.0, 3792.0, 1254.0),
    LhConstants::new(61.5, 3850.0, 1270.0),
    LhConstants::new(62.0, 3908.0, 1286.0),
    LhConstants::new(62.5, 3966.0, 1303.0),
    LhConstants::new(63.0, 4026.0, 1319.0),
    LhConstants::new(63.5, 4087.0, 1336.0),
    LhConstants::new(64.0, 4147.0, 1352.0),
    LhConstants::new(64.5, 4207.0, 1369.0),
    LhConstants::new(65.0, 4268.0, 1386.0),
    LhConstants::new(65.5, 4329.0, 1402.0),
    LhConstants::new(66.0, 4392.0, 1419.0),
    LhConstants::new(66.5, 4455.0, 1436.0),
    LhConstants::new(67.0, 4517.0, 1454.0),
    LhConstants::new(67.5, 4580.0, 1471.0),
    LhConstants::new(68.0, 4645.0, 1488.0),
    LhConstants::new(68.5, 4709.0, 1506.0),
    LhConstants::new(69.0, 4773.0, 1523.0),
    LhConstants::new(69.5, 4839.0, 1541.0),
    LhConstants::new(70.0, 4905.0, 1558.0),
];
