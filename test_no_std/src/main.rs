//! Building this module successfully guarantees that the library is no-std compatible

#![no_std]
#![no_main]

use core::panic::PanicInfo;

use thermocubic::{FrameSensor, Interpolator};

#[panic_handler]
fn panic(_info: &PanicInfo) -> ! {
    // We can't print, so there's not much to do here
    loop {}
}

#[no_mangle]
pub fn _start() -> ! {
    let mut frame = [[20.0_f32; 8]; 8];
    frame[4][4] = 30.0;

    let mut interp = Interpolator::<f32, _>::new(FrameSensor::new(frame)).unwrap();
    interp.refresh().unwrap();

    let mut out = [0.0_f32; 16 * 16];
    interp.render(16, 16, &mut out).unwrap();
    let _ = interp.query(0.5, 0.5);

    loop {} // We don't actually run this, just compile it
}
