//! # flapsched Firmware
//!
//! STM32F446RE Nucleo image. Builds the adapters, hands them to the
//! kernel, installs the kernel for the SysTick handler and sleeps.
//!
//! | Peripheral | Part | Pins |
//! |------------|------|------|
//! | TFT | ST7735, SPI1 | SCK PA5, MISO PA6, MOSI PA7, CS PB6, D/C PA9, RST PC7 |
//! | Scoreboard | HD44780 16×2, 4-bit | RS PA10, EN PB3, D4 PB5, D5 PB4, D6 PB10, D7 PA8 |
//! | High score | 24xx EEPROM, I2C1 | SCL PB8, SDA PB9 |
//! | Buttons | control, jump (active high, pulled down) | PC0, PC1 |
//! | Buzzer | active, push-pull | PB0 |
//!
//! The core clock stays on the 16 MHz HSI; SysTick is programmed from the
//! scheduler's base period.

#![no_std]
#![no_main]

use cortex_m_rt::{entry, exception};
#[cfg(feature = "defmt")]
use defmt_rtt as _;
use panic_halt as _;

use embedded_hal_bus::spi::{ExclusiveDevice, NoDelay};
use mipidsi::interface::SpiInterface;
use static_cell::StaticCell;
use stm32f4xx_hal::{
    gpio::{ErasedPin, Input, Output, PinState, PushPull},
    i2c::I2c,
    pac,
    prelude::*,
    spi::Spi,
    timer::DelayUs,
};

use flapsched::arch::cortex_m4;
use flapsched::config::{RNG_SEED, SYSTEM_CLOCK_HZ};
use flapsched::drivers::{ActiveLevel, Buttons, Eeprom24x, Hd44780, PinBuzzer, St7735};
use flapsched::kernel::Kernel;
use flapsched::periph::{Buzzer, Chirp, Display, InputPins, Pin, ScoreStore, TextDisplay};
use flapsched::sync::Shared;

type OutPin = ErasedPin<Output<PushPull>>;
type InPin = ErasedPin<Input>;

type PanelBus = SpiInterface<'static, ExclusiveDevice<Spi<pac::SPI1>, OutPin, NoDelay>, OutPin>;
type Panel = St7735<PanelBus, OutPin>;
type Lcd = Hd44780<OutPin, OutPin, OutPin, DelayUs<pac::TIM5>>;
type Store = Eeprom24x<I2c<pac::I2C1>>;

/// Every board peripheral the game touches.
struct Hardware {
    panel: Panel,
    lcd: Lcd,
    store: Store,
    buttons: Buttons<InPin, InPin>,
    buzzer: PinBuzzer<OutPin>,
}

impl Display for Hardware {
    fn set_write_window(&mut self, x0: u8, y0: u8, x1: u8, y1: u8) {
        self.panel.set_write_window(x0, y0, x1, y1);
    }

    fn fill_window(&mut self, x0: u8, y0: u8, x1: u8, y1: u8, color: u16) {
        self.panel.fill_window(x0, y0, x1, y1, color);
    }

    fn invert(&mut self, on: bool) {
        self.panel.invert(on);
    }
}

impl TextDisplay for Hardware {
    fn clear(&mut self) {
        self.lcd.clear();
    }

    fn goto(&mut self, row: u8, col: u8) {
        self.lcd.goto(row, col);
    }

    fn write_char(&mut self, c: u8) {
        self.lcd.write_char(c);
    }
}

impl ScoreStore for Hardware {
    fn read_score(&mut self) -> i32 {
        self.store.read_score()
    }

    fn write_score(&mut self, score: i32) {
        self.store.write_score(score);
    }
}

impl InputPins for Hardware {
    fn read_digital(&mut self, pin: Pin) -> bool {
        self.buttons.read_digital(pin)
    }
}

impl Buzzer for Hardware {
    fn chirp(&mut self, chirp: Chirp) {
        self.buzzer.chirp(chirp);
    }
}

/// Staging buffer for `mipidsi` pixel writes.
static PANEL_BUFFER: StaticCell<[u8; 512]> = StaticCell::new();

/// Owned by the SysTick handler once installed.
static KERNEL: Shared<Kernel<Hardware>> = Shared::new();

#[entry]
fn main() -> ! {
    let dp = pac::Peripherals::take().unwrap();
    let mut cp = cortex_m::Peripherals::take().unwrap();

    let rcc = dp.RCC.constrain();
    let clocks = rcc.cfgr.sysclk(SYSTEM_CLOCK_HZ.Hz()).freeze();

    let gpioa = dp.GPIOA.split();
    let gpiob = dp.GPIOB.split();
    let gpioc = dp.GPIOC.split();

    // --- TFT ---
    let spi = Spi::new(
        dp.SPI1,
        (
            gpioa.pa5.into_alternate(),
            gpioa.pa6.into_alternate(),
            gpioa.pa7.into_alternate(),
        ),
        embedded_hal::spi::MODE_0,
        8.MHz(),
        &clocks,
    );
    let cs = gpiob.pb6.into_push_pull_output_in_state(PinState::High).erase();
    let dc = gpioa.pa9.into_push_pull_output().erase();
    let rst = gpioc.pc7.into_push_pull_output_in_state(PinState::High).erase();
    let spi_dev = ExclusiveDevice::new_no_delay(spi, cs).unwrap();
    let di = SpiInterface::new(spi_dev, dc, PANEL_BUFFER.init([0; 512]));

    let mut boot_delay = dp.TIM2.delay_us(&clocks);
    let panel = St7735::init(di, rst, &mut boot_delay).unwrap();

    // --- Scoreboard ---
    let mut lcd = Hd44780::new(
        gpioa.pa10.into_push_pull_output().erase(),
        gpiob.pb3.into_push_pull_output().erase(),
        [
            gpiob.pb5.into_push_pull_output().erase(),
            gpiob.pb4.into_push_pull_output().erase(),
            gpiob.pb10.into_push_pull_output().erase(),
            gpioa.pa8.into_push_pull_output().erase(),
        ],
        dp.TIM5.delay_us(&clocks),
    );
    lcd.init().unwrap();

    // --- High score ---
    let scl = gpiob.pb8.into_alternate().set_open_drain();
    let sda = gpiob.pb9.into_alternate().set_open_drain();
    let store = Eeprom24x::new(I2c::new(dp.I2C1, (scl, sda), 400.kHz(), &clocks));

    // --- Buttons, buzzer ---
    let buttons = Buttons::new(
        gpioc.pc0.into_pull_down_input().erase(),
        gpioc.pc1.into_pull_down_input().erase(),
        ActiveLevel::High,
    );
    let buzzer = PinBuzzer::new(gpiob.pb0.into_push_pull_output().erase());

    let hardware = Hardware {
        panel,
        lcd,
        store,
        buttons,
        buzzer,
    };

    let kernel = Kernel::new(hardware, RNG_SEED).unwrap();
    let base_period_ms = kernel.base_period_ms();
    KERNEL.install(kernel);

    cortex_m4::set_interrupt_priorities(&mut cp.SCB);
    assert!(cortex_m4::configure_systick(&mut cp.SYST, base_period_ms));

    loop {
        cortex_m::asm::wfi();
    }
}

#[exception]
fn SysTick() {
    KERNEL.with(|kernel| kernel.tick());
}
