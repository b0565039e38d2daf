//! Decay-time lookup: the TIME control mapped to comb feedback gains.
//!
//! Each row holds one feedback gain per comb line. Row `s` targets a T60 of
//!
//! ```text
//! T60(s) = 0.4 s · 25^(s / 63)        (0.4 s at row 0, 10 s at row 63)
//! g[i]   = 10^(−3 · COMB_DELAYS[i] / (T60(s) · 48000))
//! ```
//!
//! so every line loses 60 dB in the same time regardless of its length. Gains
//! close to one are sensitive to rounding, which is why the table is computed
//! offline in double precision and only looked up at run time.
//!
//! The raw 10-bit TIME value is reduced to a row with `time >> 4`, then clamped
//! to the table, so no raw input can index outside it.

use crate::tuning::COMB_COUNT;

/// Number of rows in the gain table.
pub const TIME_STEPS: usize = 64;

/// Right shift reducing the raw 10-bit TIME value to a 6-bit row index.
pub const TIME_SHIFT: u32 = 4;

/// Per-row comb feedback gains, indexed `[row][line]`.
pub const GAIN_TABLE: [[f32; COMB_COUNT]; TIME_STEPS] = [
    [0.8184059, 0.8003524, 0.7748520, 0.7534098, 0.7330882, 0.7128017, 0.6895944, 0.6690657],
    [0.8266159, 0.8092800, 0.7847598, 0.7641108, 0.7445139, 0.7249238, 0.7024791, 0.6825935],
    [0.8344933, 0.8178552, 0.7942915, 0.7744195, 0.7555354, 0.7366331, 0.7149449, 0.6957008],
    [0.8420479, 0.8260874, 0.8034557, 0.7843436, 0.7661591, 0.7479342, 0.7269947, 0.7083884],
    [0.8492895, 0.8339863, 0.8122613, 0.7938912, 0.7763919, 0.7588331, 0.7386324, 0.7206583],
    [0.8562281, 0.8415618, 0.8207177, 0.8030709, 0.7862417, 0.7693362, 0.7498630, 0.7325140],
    [0.8628736, 0.8488236, 0.8288345, 0.8118917, 0.7957166, 0.7794508, 0.7606924, 0.7439597],
    [0.8692359, 0.8557818, 0.8366213, 0.8203629, 0.8048253, 0.7891848, 0.7711273, 0.7550010],
    [0.8753248, 0.8624463, 0.8440881, 0.8284940, 0.8135769, 0.7985466, 0.7811749, 0.7656442],
    [0.8811498, 0.8688268, 0.8512446, 0.8362948, 0.8219808, 0.8075449, 0.7908434, 0.7758961],
    [0.8867207, 0.8749333, 0.8581009, 0.8437750, 0.8300465, 0.8161889, 0.8001412, 0.7857646],
    [0.8920467, 0.8807754, 0.8646669, 0.8509446, 0.8377837, 0.8244881, 0.8090771, 0.7952578],
    [0.8971370, 0.8863627, 0.8709523, 0.8578136, 0.8452024, 0.8324521, 0.8176603, 0.8043844],
    [0.9020007, 0.8917044, 0.8769670, 0.8643917, 0.8523124, 0.8400906, 0.8259003, 0.8131534],
    [0.9066466, 0.8968099, 0.8827206, 0.8706890, 0.8591236, 0.8474137, 0.8338069, 0.8215742],
    [0.9110832, 0.9016882, 0.8882225, 0.8767151, 0.8656460, 0.8544310, 0.8413897, 0.8296563],
    [0.9153189, 0.9063481, 0.8934822, 0.8824796, 0.8718895, 0.8611527, 0.8486587, 0.8374095],
    [0.9193619, 0.9107982, 0.8985088, 0.8879922, 0.8778636, 0.8675886, 0.8556239, 0.8448437],
    [0.9232201, 0.9150469, 0.9033112, 0.8932620, 0.8835781, 0.8737485, 0.8622950, 0.8519687],
    [0.9269011, 0.9191023, 0.9078981, 0.8982984, 0.8890424, 0.8796420, 0.8686821, 0.8587944],
    [0.9304123, 0.9229724, 0.9122782, 0.9031102, 0.8942658, 0.8852788, 0.8747948, 0.8653309],
    [0.9337610, 0.9266648, 0.9164596, 0.9077062, 0.8992575, 0.8906683, 0.8806429, 0.8715878],
    [0.9369540, 0.9301869, 0.9204506, 0.9120949, 0.9040264, 0.8958198, 0.8862359, 0.8775750],
    [0.9399981, 0.9335461, 0.9242588, 0.9162847, 0.9085812, 0.9007423, 0.8915833, 0.8833021],
    [0.9428998, 0.9367491, 0.9278920, 0.9202836, 0.9129303, 0.9054446, 0.8966942, 0.8887785],
    [0.9456652, 0.9398028, 0.9313574, 0.9240995, 0.9170821, 0.9099355, 0.9015776, 0.8940136],
    [0.9483004, 0.9427136, 0.9346622, 0.9277400, 0.9210446, 0.9142233, 0.9062425, 0.8990166],
    [0.9508111, 0.9454878, 0.9378133, 0.9312125, 0.9248256, 0.9183162, 0.9106974, 0.9037962],
    [0.9532029, 0.9481313, 0.9408172, 0.9345240, 0.9284327, 0.9222223, 0.9149506, 0.9083613],
    [0.9554812, 0.9506500, 0.9436805, 0.9376815, 0.9318731, 0.9259492, 0.9190104, 0.9127205],
    [0.9576510, 0.9530495, 0.9464092, 0.9406916, 0.9351539, 0.9295044, 0.9228847, 0.9168818],
    [0.9597174, 0.9553351, 0.9490092, 0.9435608, 0.9382821, 0.9328952, 0.9265811, 0.9208535],
    [0.9616849, 0.9575119, 0.9514864, 0.9462951, 0.9412641, 0.9361285, 0.9301071, 0.9246432],
    [0.9635581, 0.9595848, 0.9538462, 0.9489005, 0.9441063, 0.9392112, 0.9334700, 0.9282587],
    [0.9653415, 0.9615587, 0.9560939, 0.9513829, 0.9468150, 0.9421497, 0.9366766, 0.9317071],
    [0.9670390, 0.9634380, 0.9582345, 0.9537476, 0.9493959, 0.9449504, 0.9397336, 0.9349957],
    [0.9686548, 0.9652271, 0.9602730, 0.9560000, 0.9518548, 0.9476192, 0.9426477, 0.9381312],
    [0.9701926, 0.9669302, 0.9622139, 0.9581451, 0.9541971, 0.9501622, 0.9454249, 0.9411203],
    [0.9716561, 0.9685512, 0.9640618, 0.9601878, 0.9564281, 0.9525848, 0.9480715, 0.9439693],
    [0.9730487, 0.9700940, 0.9658209, 0.9621328, 0.9585528, 0.9548924, 0.9505930, 0.9466844],
    [0.9743738, 0.9715622, 0.9674954, 0.9639845, 0.9605760, 0.9570903, 0.9529952, 0.9492715],
    [0.9756345, 0.9729594, 0.9690891, 0.9657474, 0.9625024, 0.9591834, 0.9552833, 0.9517363],
    [0.9768340, 0.9742888, 0.9706059, 0.9674254, 0.9643364, 0.9611764, 0.9574626, 0.9540842],
    [0.9779751, 0.9755537, 0.9720494, 0.9690225, 0.9660824, 0.9630741, 0.9595379, 0.9563205],
    [0.9790606, 0.9767571, 0.9734229, 0.9705426, 0.9677442, 0.9648807, 0.9615140, 0.9584504],
    [0.9800931, 0.9779019, 0.9747299, 0.9719891, 0.9693260, 0.9666004, 0.9633955, 0.9604785],
    [0.9810752, 0.9789910, 0.9759733, 0.9733656, 0.9708314, 0.9682373, 0.9651866, 0.9624096],
    [0.9820093, 0.9800269, 0.9771563, 0.9746753, 0.9722639, 0.9697953, 0.9668916, 0.9642481],
    [0.9828977, 0.9810123, 0.9782817, 0.9759214, 0.9736271, 0.9712780, 0.9685145, 0.9659982],
    [0.9837426, 0.9819495, 0.9793523, 0.9771069, 0.9749241, 0.9726889, 0.9700591, 0.9676642],
    [0.9845461, 0.9828408, 0.9803706, 0.9782347, 0.9761581, 0.9740314, 0.9715290, 0.9692498],
    [0.9853102, 0.9836885, 0.9813391, 0.9793075, 0.9773321, 0.9753088, 0.9729278, 0.9707588],
    [0.9860368, 0.9844946, 0.9822603, 0.9803280, 0.9784489, 0.9765241, 0.9742587, 0.9721949],
    [0.9867276, 0.9852612, 0.9831364, 0.9812987, 0.9795113, 0.9776803, 0.9755251, 0.9735614],
    [0.9873846, 0.9859902, 0.9839696, 0.9822218, 0.9805218, 0.9787802, 0.9767299, 0.9748616],
    [0.9880091, 0.9866834, 0.9847620, 0.9830998, 0.9814830, 0.9798264, 0.9778760, 0.9760986],
    [0.9886030, 0.9873424, 0.9855155, 0.9839348, 0.9823972, 0.9808215, 0.9789663, 0.9772755],
    [0.9891676, 0.9879691, 0.9862320, 0.9847289, 0.9832666, 0.9817681, 0.9800035, 0.9783951],
    [0.9897044, 0.9885649, 0.9869132, 0.9854840, 0.9840934, 0.9826683, 0.9809900, 0.9794601],
    [0.9902147, 0.9891314, 0.9875610, 0.9862020, 0.9848797, 0.9835244, 0.9819283, 0.9804732],
    [0.9906998, 0.9896700, 0.9881769, 0.9868848, 0.9856274, 0.9843386, 0.9828206, 0.9814367],
    [0.9911610, 0.9901820, 0.9887625, 0.9875340, 0.9863384, 0.9851129, 0.9836693, 0.9823531],
    [0.9915994, 0.9906687, 0.9893192, 0.9881512, 0.9870144, 0.9858491, 0.9844764, 0.9832247],
    [0.9920162, 0.9911314, 0.9898485, 0.9887381, 0.9876572, 0.9865492, 0.9852439, 0.9840536],
];

/// Reduces a raw TIME value to a table row.
///
/// ```rust
/// use reverie_engine::gain_table::row_for_time;
///
/// assert_eq!(row_for_time(0), 0);
/// assert_eq!(row_for_time(1023), 63);
/// assert_eq!(row_for_time(-7), 0);
/// assert_eq!(row_for_time(i32::MAX), 63);
/// ```
#[inline]
pub const fn row_for_time(time: i32) -> usize {
    if time <= 0 {
        return 0;
    }
    let row = (time as u32 >> TIME_SHIFT) as usize;
    if row >= TIME_STEPS { TIME_STEPS - 1 } else { row }
}

/// Looks up the comb feedback gains for the current TIME control.
///
/// Remembers the selected row so owners can inspect what the render path is
/// using.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub struct GainScheduler {
    row: usize,
}

impl GainScheduler {
    /// Creates a scheduler sitting on row 0.
    pub const fn new() -> Self {
        Self { row: 0 }
    }

    /// Selects the row for `time` and returns its gains.
    #[inline]
    pub fn schedule(&mut self, time: i32) -> &'static [f32; COMB_COUNT] {
        self.row = row_for_time(time);
        &GAIN_TABLE[self.row]
    }

    /// Row chosen by the last [`schedule`](Self::schedule) call.
    pub fn row(&self) -> usize {
        self.row
    }

    /// Gains of the current row.
    pub fn gains(&self) -> &'static [f32; COMB_COUNT] {
        &GAIN_TABLE[self.row]
    }
}
