use rand::Rng;

use crate::constants::{
    DISPLAY_HEIGHT, DISPLAY_WIDTH, FLAG_REGISTER, SPRITE_HEIGHT, STACK_SIZE,
};
use crate::error::Error;
use crate::opcode::Opcode;
use crate::state::State;
use crate::timing::{is_first_in_frame, stall, Step};

type Outcome = Result<Step, Error>;

/// pc += 2 if the condition holds
fn skip_if(state: &mut State, condition: bool) -> Outcome {
    if condition {
        state.pc = state.pc.wrapping_add(0x2);
    }
    Ok(Step::Executed)
}

/// Address of the instruction being executed; the pc has already moved past it.
fn current_address(state: &State) -> u16 {
    state.pc.wrapping_sub(0x2)
}

/// clear
/// Only the first instruction of a frame may clear the screen.
pub fn cls(_op: u16, state: &mut State) -> Outcome {
    if !is_first_in_frame(state) {
        return Ok(stall(state, Step::StalledForFrame));
    }
    state.frame_buffer = [[0; DISPLAY_WIDTH]; DISPLAY_HEIGHT];
    state.draw_flag = true;
    Ok(Step::Executed)
}

/// PC = STACK.pop()
pub fn ret(_op: u16, state: &mut State) -> Outcome {
    if state.sp == 0 {
        return Err(Error::StackUnderflow {
            address: current_address(state),
        });
    }
    state.sp -= 1;
    state.pc = state.stack[state.sp as usize];
    Ok(Step::Executed)
}

/// sys addr
/// Not executed; dumps the registers to the log.
pub fn sys(op: u16, state: &mut State) -> Outcome {
    tracing::debug!(addr = op.addr(), v = ?state.v, i = state.i, "sys");
    Ok(Step::Executed)
}

/// PC = addr
pub fn jump(op: u16, state: &mut State) -> Outcome {
    state.pc = op.addr();
    Ok(Step::Executed)
}

/// STACK.push(PC); PC = addr
pub fn call(op: u16, state: &mut State) -> Outcome {
    if state.sp as usize >= STACK_SIZE {
        return Err(Error::StackOverflow {
            address: current_address(state),
        });
    }
    state.stack[state.sp as usize] = state.pc;
    state.sp += 1;
    state.pc = op.addr();
    Ok(Step::Executed)
}

/// if Vx == kk then pc += 2
pub fn ske(op: u16, state: &mut State) -> Outcome {
    let condition = state.v[op.x()] == op.kk();
    skip_if(state, condition)
}

/// if Vx != kk then pc += 2
pub fn skne(op: u16, state: &mut State) -> Outcome {
    let condition = state.v[op.x()] != op.kk();
    skip_if(state, condition)
}

/// if Vx == Vy then pc += 2
pub fn skre(op: u16, state: &mut State) -> Outcome {
    let condition = state.v[op.x()] == state.v[op.y()];
    skip_if(state, condition)
}

/// Vx = kk
pub fn load(op: u16, state: &mut State) -> Outcome {
    state.v[op.x()] = op.kk();
    Ok(Step::Executed)
}

/// Vx += kk
/// Overflow is dropped and VF is left alone
pub fn add(op: u16, state: &mut State) -> Outcome {
    state.v[op.x()] = state.v[op.x()].wrapping_add(op.kk());
    Ok(Step::Executed)
}

/// Vx = Vy
pub fn mv(op: u16, state: &mut State) -> Outcome {
    state.v[op.x()] = state.v[op.y()];
    Ok(Step::Executed)
}

/// Vx |= Vy; VF = 0
pub fn or(op: u16, state: &mut State) -> Outcome {
    state.v[op.x()] |= state.v[op.y()];
    state.set_flag(false);
    Ok(Step::Executed)
}

/// Vx &= Vy; VF = 0
pub fn and(op: u16, state: &mut State) -> Outcome {
    state.v[op.x()] &= state.v[op.y()];
    state.set_flag(false);
    Ok(Step::Executed)
}

/// Vx ^= Vy; VF = 0
pub fn xor(op: u16, state: &mut State) -> Outcome {
    state.v[op.x()] ^= state.v[op.y()];
    state.set_flag(false);
    Ok(Step::Executed)
}

/// Vx += Vy; VF = overflow
pub fn addr(op: u16, state: &mut State) -> Outcome {
    let (res, over) = state.v[op.x()].overflowing_add(state.v[op.y()]);
    state.v[op.x()] = res;
    state.set_flag(over);
    Ok(Step::Executed)
}

/// Vx -= Vy; VF = !underflow
pub fn sub(op: u16, state: &mut State) -> Outcome {
    let (res, under) = state.v[op.x()].overflowing_sub(state.v[op.y()]);
    state.v[op.x()] = res;
    state.set_flag(!under);
    Ok(Step::Executed)
}

/// Vx = Vy >> 1; VF = shifted out bit
/// Vy is copied into Vx before the shift.
pub fn shr(op: u16, state: &mut State) -> Outcome {
    state.v[op.x()] = state.v[op.y()];
    let lsb = state.v[op.x()] & 0x1;
    state.v[op.x()] >>= 1;
    state.v[FLAG_REGISTER] = lsb;
    Ok(Step::Executed)
}

/// Vx = Vy - Vx; VF = Vy > Vx
/// The flag compares against Vx after it has been written.
pub fn subn(op: u16, state: &mut State) -> Outcome {
    state.v[op.x()] = state.v[op.y()].wrapping_sub(state.v[op.x()]);
    let flag = state.v[op.y()] > state.v[op.x()];
    state.set_flag(flag);
    Ok(Step::Executed)
}

/// Vx = Vy << 1; VF = shifted out bit
/// Vy is copied into Vx before the shift.
pub fn shl(op: u16, state: &mut State) -> Outcome {
    state.v[op.x()] = state.v[op.y()];
    let msb = state.v[op.x()] >> 7;
    state.v[op.x()] <<= 1;
    state.v[FLAG_REGISTER] = msb;
    Ok(Step::Executed)
}

/// if Vx != Vy then pc += 2
pub fn skrne(op: u16, state: &mut State) -> Outcome {
    let condition = state.v[op.x()] != state.v[op.y()];
    skip_if(state, condition)
}

/// I = addr
pub fn loadi(op: u16, state: &mut State) -> Outcome {
    state.i = op.addr();
    Ok(Step::Executed)
}

/// PC = V0 + addr
pub fn jumpi(op: u16, state: &mut State) -> Outcome {
    state.pc = op.addr() + u16::from(state.v[0x0]);
    Ok(Step::Executed)
}

/// Vx = rand_byte & kk
pub fn rnd(op: u16, state: &mut State) -> Outcome {
    let rand_byte: u8 = state.rng.gen();
    state.v[op.x()] = rand_byte & op.kk();
    Ok(Step::Executed)
}

/// draw_sprite(x=Vx y=Vy size=n)
/// XORs the n byte sprite at I onto the FrameBuffer at (Vx % 64, Vy % 32).
/// Rows and columns that fall off the display are clipped rather than wrapped.
/// VF is set if any pixel was erased.
/// Only the first instruction of a frame may draw.
pub fn draw(op: u16, state: &mut State) -> Outcome {
    if !is_first_in_frame(state) {
        return Ok(stall(state, Step::StalledForFrame));
    }

    let left = state.v[op.x()] as usize % DISPLAY_WIDTH;
    let top = state.v[op.y()] as usize % DISPLAY_HEIGHT;
    let base = state.i;

    // Reset the flag (used for collision detection)
    state.set_flag(false);

    for row in 0..op.n() as usize {
        let y = top + row;
        if y >= DISPLAY_HEIGHT {
            break;
        }
        let sprite = state.read(base.wrapping_add(row as u16));
        for bit in 0..8 {
            let x = left + bit;
            if x >= DISPLAY_WIDTH {
                break;
            }
            if sprite & (0x80 >> bit) != 0 {
                if state.frame_buffer[y][x] == 1 {
                    state.set_flag(true);
                }
                state.frame_buffer[y][x] ^= 1;
            }
        }
    }

    state.draw_flag = true;
    Ok(Step::Executed)
}

/// if Vx.pressed then pc += 2
pub fn skpr(op: u16, state: &mut State) -> Outcome {
    let condition = state.keypad.is_pressed(state.v[op.x()]);
    skip_if(state, condition)
}

/// if !Vx.pressed then pc += 2
pub fn skup(op: u16, state: &mut State) -> Outcome {
    let condition = !state.keypad.is_pressed(state.v[op.x()]);
    skip_if(state, condition)
}

/// Vx = DT
pub fn moved(op: u16, state: &mut State) -> Outcome {
    state.v[op.x()] = state.delay_timer;
    Ok(Step::Executed)
}

/// Vx = released key
/// Retried until a key held at the last frame boundary has been let go.
pub fn keyd(op: u16, state: &mut State) -> Outcome {
    match state.keypad.released_key() {
        Some(key) => {
            state.v[op.x()] = key;
            Ok(Step::Executed)
        }
        None => Ok(stall(state, Step::StalledForKeyRelease)),
    }
}

/// DT = Vx
pub fn loads(op: u16, state: &mut State) -> Outcome {
    state.delay_timer = state.v[op.x()];
    Ok(Step::Executed)
}

/// ST = Vx
pub fn ld(op: u16, state: &mut State) -> Outcome {
    state.sound_timer = state.v[op.x()];
    Ok(Step::Executed)
}

/// I += Vx
pub fn addi(op: u16, state: &mut State) -> Outcome {
    state.i = state.i.wrapping_add(u16::from(state.v[op.x()]));
    Ok(Step::Executed)
}

/// I = Vx * 5
/// Set I to the memory address of the sprite for Vx
/// See constants::SPRITE_SHEET for more details
pub fn ldspr(op: u16, state: &mut State) -> Outcome {
    state.i = u16::from(state.v[op.x()]) * SPRITE_HEIGHT;
    Ok(Step::Executed)
}

/// mem[I..I+3] = bcd(Vx)
pub fn bcd(op: u16, state: &mut State) -> Outcome {
    let value = u16::from(state.v[op.x()]);
    let digits = [value % 1000 / 100, value % 100 / 10, value % 10];
    let base = state.i;
    for (offset, digit) in (0u16..).zip(digits) {
        state.write(base.wrapping_add(offset), digit as u8);
    }
    Ok(Step::Executed)
}

/// mem[I..=I+x] = V0..=Vx
pub fn stor(op: u16, state: &mut State) -> Outcome {
    let base = state.i;
    for register in 0..=op.x() {
        let byte = state.v[register];
        state.write(base.wrapping_add(register as u16), byte);
    }
    Ok(Step::Executed)
}

/// V0..=Vx = mem[I..=I+x]
pub fn read(op: u16, state: &mut State) -> Outcome {
    let base = state.i;
    for register in 0..=op.x() {
        state.v[register] = state.read(base.wrapping_add(register as u16));
    }
    Ok(Step::Executed)
}
