//! Built-in sample document for demos and tests.

/// Sample 837P document with one claim and two service lines.
///
/// Passes every built-in rule. Segments are separated by line breaks after
/// each terminator, which the tokenizer ignores.
pub const SAMPLE_CLAIM: &str = r"ISA*00*          *00*          *ZZ*SUBMITTERID    *ZZ*RECEIVERID     *230101*1200*U*^*00501*000000001*0*P~
GS*HC*SUBMITTERID*RECEIVERID*20230101*1200*1*X*005010X222A1~
ST*837*0001*005010X222A1~
BHT*0019*00*REF47517*20230101*1200*CH~
NM1*41*2*PREMIER BILLING SERVICE*****46*TGJ23~
PER*IC*JERRY*TE*3055552222~
NM1*40*2*KEY INSURANCE COMPANY*****46*66783JJT~
HL*1**20*1~
NM1*85*2*BEN KILDARE SERVICE*****XX*9876543210~
N3*234 SEAWAY ST~
N4*MIAMI*FL*33111~
REF*EI*587654321~
HL*2*1*22*0~
SBR*P*18*******CI~
NM1*IL*1*SMITH*TED****MI*000221111A~
NM1*PR*2*ALLIANCE HEALTH AND LIFE INSURANCE*****PI*741234~
CLM*26463774*100***11:B:1*Y*A*Y*I~
HI*ABK:J020~
LX*1~
SV1*HC:99213*40*UN*1***1~
DTP*472*D8*20230101~
LX*2~
SV1*HC:87070*15*UN*1***1~
DTP*472*D8*20230101~
SE*23*0001~
GE*1*1~
IEA*1*000000001~";
