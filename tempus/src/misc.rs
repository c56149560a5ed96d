// FIXME(stable): Constant traits

pub(crate) const fn boolusize(val: bool) -> usize {
  val as usize
}

pub(crate) const fn i8i32(val: i8) -> i32 {
  val as i32
}

pub(crate) const fn u8u32(val: u8) -> u32 {
  val as u32
}

pub(crate) const fn u8usize(val: u8) -> usize {
  val as usize
}
